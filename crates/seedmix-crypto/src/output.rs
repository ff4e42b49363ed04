//! Producing a block and writing it out.

use std::fmt;
use std::io::Write;

use zeroize::Zeroizing;

use crate::mix::mix_into;
use crate::random::{EntropySource, fill_exact};
use crate::{EntropyError, OUTPUT_SIZE};

/// How the emitted block is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One sample, emitted verbatim
    Raw,
    /// Three samples mixed through SHA3-512
    Mixed,
}

impl Mode {
    /// Stable name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Produce one output block in the given mode.
///
/// The block is built in place inside the returned [`Zeroizing`] buffer.
///
/// # Errors
///
/// Returns the first acquisition failure.
pub fn generate<S: EntropySource + ?Sized>(
    mode: Mode,
    source: &mut S,
) -> Result<Zeroizing<[u8; OUTPUT_SIZE]>, EntropyError> {
    let mut block = Zeroizing::new([0u8; OUTPUT_SIZE]);
    match mode {
        Mode::Raw => fill_exact(source, block.as_mut_slice())?,
        Mode::Mixed => mix_into(source, &mut block)?,
    }
    Ok(block)
}

/// Write `bytes` unmodified to `out` and flush.
///
/// # Errors
///
/// Returns [`EntropyError::Output`] if writing or flushing fails, including
/// a closed pipe.
pub fn write_block<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> Result<(), EntropyError> {
    out.write_all(bytes)?;
    out.flush()?;
    tracing::debug!(len = bytes.len(), "wrote block");
    Ok(())
}

/// Generate a block and write it to `out`.
///
/// The block is fully produced before anything is written, so a failed
/// acquisition leaves `out` untouched.
///
/// # Errors
///
/// Returns acquisition failures from [`generate`] and output failures from
/// [`write_block`].
pub fn run<S, W>(mode: Mode, source: &mut S, out: &mut W) -> Result<(), EntropyError>
where
    S: EntropySource + ?Sized,
    W: Write + ?Sized,
{
    tracing::debug!(mode = mode.name(), source = source.name(), "generating block");

    let block = generate(mode, source).inspect_err(|e| {
        tracing::warn!(mode = mode.name(), error = %e, "block generation failed");
    })?;

    write_block(out, block.as_slice())
}
