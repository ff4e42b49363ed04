//! # SEEDMIX Crypto
//!
//! Randomness acquisition and mixing for the SEEDMIX emitters.
//!
//! This crate provides:
//! - An [`EntropySource`](random::EntropySource) capability backed by the OS CSPRNG
//! - Exact-length block acquisition that rejects short reads
//! - SHA3-512 mixing of three independent samples
//! - Writing a finished block to an output stream
//!
//! ## Output Modes
//!
//! | Mode | Samples | Transform | Output |
//! |------|---------|-----------|--------|
//! | Raw | 1 x 64 bytes | none | 64 bytes |
//! | Mixed | 3 x 64 bytes | SHA3-512 over the 192-byte concatenation | 64 bytes |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod mix;
pub mod output;
pub mod random;

pub use error::EntropyError;
pub use output::{Mode, run};
pub use random::{EntropySource, OsEntropy};

/// Size of one sample drawn from a randomness source
pub const BLOCK_SIZE: usize = 64;

/// Number of samples mixed in [`Mode::Mixed`]
pub const MIX_SAMPLES: usize = 3;

/// Size of the concatenated samples fed to the hash
pub const COMBINED_SIZE: usize = BLOCK_SIZE * MIX_SAMPLES;

/// SHA3-512 output size
pub const DIGEST_SIZE: usize = 64;

/// Size of the block written by either mode
pub const OUTPUT_SIZE: usize = 64;

const _: () = assert!(BLOCK_SIZE == OUTPUT_SIZE && DIGEST_SIZE == OUTPUT_SIZE);
