//! Error types for randomness acquisition and output.

use thiserror::Error;

/// Errors raised while acquiring or emitting a block
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The randomness source could not service the request
    #[error("randomness source unavailable: {0}")]
    SourceUnavailable(String),

    /// The randomness source returned fewer bytes than requested
    #[error("short read from randomness source: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Requested length
        expected: usize,
        /// Bytes actually produced
        actual: usize,
    },

    /// Writing or flushing the output stream failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl EntropyError {
    /// Whether the error came from the randomness source rather than the output.
    #[must_use]
    pub fn is_source_failure(&self) -> bool {
        matches!(self, Self::SourceUnavailable(_) | Self::ShortRead { .. })
    }
}
