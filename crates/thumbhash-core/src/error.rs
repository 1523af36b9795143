//! Error types for ThumbHash operations

use thiserror::Error;

/// Result type for ThumbHash operations
pub type ThumbHashResult<T> = Result<T, ThumbHashError>;

/// Errors that can occur during hashing or reconstruction
#[derive(Error, Debug)]
pub enum ThumbHashError {
    /// The byte array is not a structurally valid hash
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Unexpected end of bitstream")]
    UnexpectedEnd,

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ThumbHashError {
    pub fn is_invalid_hash(&self) -> bool {
        matches!(self, ThumbHashError::InvalidHash(_))
    }
}
