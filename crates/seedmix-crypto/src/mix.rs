//! Mixing several independent samples into one digest.
//!
//! Three blocks are drawn separately, concatenated in acquisition order and
//! condensed through SHA3-512. The result is 64 bytes that stay unpredictable
//! as long as at least one of the samples was.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::hash::{DigestOutput, sha3_512_into};
use crate::random::{EntropySource, RandomBlock, random_block};
use crate::{BLOCK_SIZE, COMBINED_SIZE, DIGEST_SIZE, EntropyError, MIX_SAMPLES};

/// Ordered concatenation of [`MIX_SAMPLES`] random blocks.
///
/// Wiped from memory on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CombinedBuffer([u8; COMBINED_SIZE]);

impl CombinedBuffer {
    /// Concatenate blocks in the order given.
    #[must_use]
    pub fn from_blocks(blocks: &[RandomBlock; MIX_SAMPLES]) -> Self {
        let mut buf = [0u8; COMBINED_SIZE];
        for (chunk, block) in buf.chunks_exact_mut(BLOCK_SIZE).zip(blocks) {
            chunk.copy_from_slice(block.as_bytes());
        }
        Self(buf)
    }

    /// Borrow the concatenated bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; COMBINED_SIZE] {
        &self.0
    }

    /// SHA3-512 over the whole buffer, written into `out`.
    pub fn digest_into(&self, out: &mut DigestOutput) {
        sha3_512_into(&self.0, out);
    }

    /// SHA3-512 over the whole buffer.
    #[must_use]
    pub fn digest(&self) -> Zeroizing<DigestOutput> {
        let mut out = Zeroizing::new([0u8; DIGEST_SIZE]);
        self.digest_into(&mut out);
        out
    }
}

/// Draw three independent blocks from `source` and write the SHA3-512
/// digest of their concatenation into `out`.
///
/// # Errors
///
/// Fails on the first acquisition that fails. Blocks drawn before the
/// failure are discarded and `out` is left untouched.
pub fn mix_into<S: EntropySource + ?Sized>(
    source: &mut S,
    out: &mut DigestOutput,
) -> Result<(), EntropyError> {
    let blocks = [
        random_block(source)?,
        random_block(source)?,
        random_block(source)?,
    ];

    CombinedBuffer::from_blocks(&blocks).digest_into(out);

    tracing::debug!(
        source = source.name(),
        samples = MIX_SAMPLES,
        input_len = COMBINED_SIZE,
        "mixed samples through SHA3-512"
    );

    Ok(())
}

/// Draw three independent blocks from `source` and return the SHA3-512
/// digest of their concatenation.
///
/// # Errors
///
/// Same as [`mix_into`].
pub fn mixed_block<S: EntropySource + ?Sized>(
    source: &mut S,
) -> Result<Zeroizing<DigestOutput>, EntropyError> {
    let mut out = Zeroizing::new([0u8; DIGEST_SIZE]);
    mix_into(source, &mut out)?;
    Ok(out)
}
