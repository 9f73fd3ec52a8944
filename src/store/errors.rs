//! Row store error types

use thiserror::Error;

use crate::blob::BlobError;
use crate::codec::CodecError;

/// Result type for row store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Row store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Operation references an unregistered schema name
    #[error("unknown schema '{0}'")]
    UnknownSchema(String),

    /// A pushed field name is not declared in its schema
    #[error("unknown field '{field}' for schema '{schema}'")]
    UnknownField { schema: String, field: String },

    /// A pushed value's type tag does not match the declared field type
    #[error("type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Encode/decode failure from the codec
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Read or write failure from the blob store
    #[error(transparent)]
    Blob(#[from] BlobError),
}
