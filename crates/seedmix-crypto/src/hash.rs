//! SHA3-512 hashing.
//!
//! The digest can be written straight into a caller-owned buffer, so output
//! that must be wiped never passes through an unmanaged temporary.

use sha3::digest::generic_array::GenericArray;
use sha3::{Digest, Sha3_512};

/// SHA3-512 hash output (64 bytes).
pub type DigestOutput = [u8; 64];

/// Compute the SHA3-512 hash of input data.
#[must_use]
pub fn sha3_512(data: &[u8]) -> DigestOutput {
    let mut out = [0u8; 64];
    sha3_512_into(data, &mut out);
    out
}

/// Compute the SHA3-512 hash of input data into `out`.
pub fn sha3_512_into(data: &[u8], out: &mut DigestOutput) {
    let mut hasher = Sha3_512::new();
    Digest::update(&mut hasher, data);
    hasher.finalize_into(GenericArray::from_mut_slice(out));
}
