use thiserror::Error;

use crate::validation::ValidationError;

/// The single error kind surfaced by the record store.
///
/// Every failure raised by the underlying engine (malformed statement,
/// missing table or column, connectivity loss, constraint violation) and
/// every rejected SQL identifier is translated into this type at the store
/// boundary, preserving the underlying message for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("data access error: {message}")]
pub struct DataAccessError {
    message: String,
}

impl DataAccessError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message carried over from the underlying failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<sqlx::Error> for DataAccessError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ValidationError> for DataAccessError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_underlying_message() {
        let err = DataAccessError::new("no such column: WingSpan");
        assert_eq!(err.message(), "no such column: WingSpan");
        assert_eq!(err.to_string(), "data access error: no such column: WingSpan");
    }

    #[test]
    fn test_wraps_validation_errors() {
        let invalid = ValidationError::InvalidCharacters("bad-name".to_string());
        let err = DataAccessError::from(invalid.clone());
        assert!(err.message().contains("bad-name"));
        assert_eq!(err.message(), invalid.to_string());
    }
}
