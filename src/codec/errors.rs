//! Codec error types

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Stored bytes do not parse as the canonical text form
    #[error("corrupt blob: {0}")]
    CorruptBlob(String),

    /// Zlib inflate failed
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// A value could not be placed into the canonical text form
    #[error("encoding failed: {0}")]
    Encode(String),
}
