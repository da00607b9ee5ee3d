//! Error types for bitnum-common.

use thiserror::Error;

/// Common error type for bitnum operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Byte input did not match the fixed width of the target type.
    #[error("invalid length: expected byte length is {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },
}

impl Error {
    /// The byte width the failing operation required.
    pub fn expected_len(&self) -> usize {
        match self {
            Error::InvalidLength { expected, .. } => *expected,
            Error::UnexpectedEof { needed, .. } => *needed,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
