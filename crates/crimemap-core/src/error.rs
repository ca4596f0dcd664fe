//! Error types for the crimemap backend.

use thiserror::Error;

use crate::filter::ValidationError;

/// Result type alias using crimemap's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for crimemap operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filter payload failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error originated from a client-supplied value, as
    /// opposed to a storage or configuration failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("DB_PORT is not a number".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: DB_PORT is not a number"
        );
    }

    #[test]
    fn test_validation_error_display_passes_through() {
        let err = Error::Validation(ValidationError::MissingField("east"));
        assert_eq!(err.to_string(), "missing required field: east");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::Validation(ValidationError::MissingField("north")).is_client_error());
        assert!(!Error::Config("bad".to_string()).is_client_error());
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        match err {
            Error::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
