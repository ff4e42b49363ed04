//! Randomness sources and block acquisition.
//!
//! Production randomness comes from the operating system CSPRNG through
//! [`OsEntropy`]. Everything above this module talks to the
//! [`EntropySource`] capability, so tests can substitute a deterministic
//! source without touching the OS entropy pool.

use std::fmt;
use std::io::{self, Read};

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{BLOCK_SIZE, EntropyError};

/// A capability that produces unpredictable bytes on request.
pub trait EntropySource {
    /// Write up to `buf.len()` bytes into the front of `buf`.
    ///
    /// Returns the number of bytes produced. A well-behaved source either
    /// fills the whole buffer or fails; callers must go through
    /// [`fill_exact`] to reject short reads.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::SourceUnavailable`] if the source cannot
    /// service the request.
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError>;

    /// Short label used in log events.
    fn name(&self) -> &'static str;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        (**self).read_entropy(buf)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The operating system CSPRNG.
///
/// May block until the OS pool is seeded on platforms where that applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        getrandom::fill(buf).map_err(|e| EntropyError::SourceUnavailable(e.to_string()))?;
        Ok(buf.len())
    }

    fn name(&self) -> &'static str {
        "os"
    }
}

/// Adapter exposing any `rand_core` CSPRNG as an [`EntropySource`].
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RngSource<R> {
    /// Wrap a cryptographically secure generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Recover the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::SourceUnavailable(e.to_string()))?;
        Ok(buf.len())
    }

    fn name(&self) -> &'static str {
        "rng"
    }
}

/// Adapter reading randomness from a byte stream.
///
/// Reads until the buffer is full or the stream ends. End of stream is not
/// an error here; it surfaces as a short read in [`fill_exact`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Recover the wrapped reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> EntropySource for ReaderSource<R> {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(EntropyError::SourceUnavailable(e.to_string())),
            }
        }
        Ok(filled)
    }

    fn name(&self) -> &'static str {
        "reader"
    }
}

/// Fill `buf` completely from `source`, or fail.
///
/// The source is asked once. Anything short of a full buffer, including a
/// zero-length read, is rejected and the partially written buffer is wiped.
///
/// # Errors
///
/// Returns [`EntropyError::ShortRead`] if the source produced fewer bytes
/// than requested, or the source's own error if it failed outright.
pub fn fill_exact<S: EntropySource + ?Sized>(
    source: &mut S,
    buf: &mut [u8],
) -> Result<(), EntropyError> {
    let expected = buf.len();
    let actual = source.read_entropy(buf)?;

    if actual < expected {
        buf.zeroize();
        tracing::warn!(
            source = source.name(),
            expected,
            actual,
            "short read from randomness source"
        );
        return Err(EntropyError::ShortRead { expected, actual });
    }
    if actual > expected {
        buf.zeroize();
        return Err(EntropyError::SourceUnavailable(format!(
            "source reported {actual} bytes for a {expected}-byte buffer"
        )));
    }

    Ok(())
}

/// One 64-byte sample from a randomness source.
///
/// Wiped from memory on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RandomBlock([u8; BLOCK_SIZE]);

impl RandomBlock {
    /// Wrap bytes that were obtained elsewhere.
    #[must_use]
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the block contents.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

impl fmt::Debug for RandomBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RandomBlock([REDACTED])")
    }
}

/// Acquire one [`RandomBlock`] from `source`.
///
/// # Errors
///
/// Propagates any failure from [`fill_exact`].
pub fn random_block<S: EntropySource + ?Sized>(source: &mut S) -> Result<RandomBlock, EntropyError> {
    let mut block = RandomBlock([0u8; BLOCK_SIZE]);
    fill_exact(source, &mut block.0)?;
    tracing::trace!(source = source.name(), len = BLOCK_SIZE, "acquired random block");
    Ok(block)
}
