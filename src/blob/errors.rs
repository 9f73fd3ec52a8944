//! Blob store error types

use thiserror::Error;

/// Result type for blob store operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Blob store errors
#[derive(Debug, Clone, Error)]
pub enum BlobError {
    /// Backend read failure
    #[error("blob read failed: {0}")]
    Read(String),

    /// Backend write failure
    #[error("blob write failed: {0}")]
    Write(String),
}
