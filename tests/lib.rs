//! Test doubles for SEEDMIX integration tests.
//!
//! Deterministic stand-ins for the OS randomness source, so tests can check
//! exact outputs and failure paths.

use std::collections::VecDeque;

use seedmix_crypto::{BLOCK_SIZE, EntropyError, EntropySource};

/// Source that answers each request with the next scripted chunk.
///
/// A chunk shorter than the request simulates a short read. Once the script
/// runs out, every request fails.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    chunks: VecDeque<Vec<u8>>,
    requests: Vec<usize>,
}

impl ScriptedSource {
    /// Create a source from the chunks it will hand out, in order.
    pub fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Source producing full blocks filled with the given byte values.
    pub fn filled_blocks(fills: &[u8]) -> Self {
        Self::new(fills.iter().map(|&b| vec![b; BLOCK_SIZE]))
    }

    /// Sizes of every request made so far.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// Chunks not yet handed out.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }
}

impl EntropySource for ScriptedSource {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        self.requests.push(buf.len());

        let chunk = self
            .chunks
            .pop_front()
            .ok_or_else(|| EntropyError::SourceUnavailable("script exhausted".to_string()))?;

        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        Ok(n)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Source that succeeds a fixed number of times, then fails permanently.
#[derive(Debug)]
pub struct FailingSource {
    successes_left: usize,
    calls: usize,
}

impl FailingSource {
    /// Fail on request number `successes + 1`.
    pub fn after(successes: usize) -> Self {
        Self {
            successes_left: successes,
            calls: 0,
        }
    }

    /// Number of requests made so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl EntropySource for FailingSource {
    fn read_entropy(&mut self, buf: &mut [u8]) -> Result<usize, EntropyError> {
        self.calls += 1;
        if self.successes_left == 0 {
            return Err(EntropyError::SourceUnavailable("permission denied".to_string()));
        }
        self.successes_left -= 1;
        buf.fill(0x5A);
        Ok(buf.len())
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Flip one bit of `bytes`, addressed from the start of the slice.
pub fn flip_bit(bytes: &mut [u8], bit: usize) {
    bytes[bit / 8] ^= 1 << (bit % 8);
}
