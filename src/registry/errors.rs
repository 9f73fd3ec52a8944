//! Schema registry error types

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A schema with this name is already registered
    #[error("schema '{0}' is already registered")]
    DuplicateSchema(String),

    /// A declared field type tag is outside the primitive universe
    #[error("unknown field type tag '{0}'")]
    InvalidType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = RegistryError::DuplicateSchema("users".into());
        assert!(err.to_string().contains("users"));

        let err = RegistryError::InvalidType("decimal".into());
        assert!(err.to_string().contains("decimal"));
    }
}
