//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error originating from database operations (`sqlx`).
    #[error("Database Error: {0}")]
    Db(Arc<sqlx::Error>),

    /// Missing or malformed configuration (credentials, log directory).
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// User input rejected before reaching the database.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A record looked up by key does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: String, id: String },

    /// Password hashing failed (`argon2`).
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error related to progress bar style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Reasons a piece of user input is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid phone number (expected 10 digits)")]
    InvalidPhone(String),

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: String, value: String },

    #[error("{field} must be a positive number")]
    NotPositive { field: String },

    #[error("{field} cannot be negative")]
    Negative { field: String },

    #[error("{field}: '{value}' is not one of {allowed}")]
    InvalidChoice {
        field: String,
        value: String,
        allowed: String,
    },
}

// --- From implementations ---
// These allow easy conversion from external error types into AppError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Db(Arc::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for AppError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        AppError::Template(Arc::new(err))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(err.to_string())
    }
}

impl AppError {
    /// True for constraint violations reported by MySQL (duplicate keys, dangling or
    /// still-referenced foreign keys). These are user mistakes, not failures.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            AppError::Db(e) => match e.as_ref() {
                sqlx::Error::Database(db) => {
                    // SQLSTATE class 23: integrity constraint violation
                    db.code().map(|c| c.starts_with("23")).unwrap_or(false)
                },
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_into_app_error() {
        let err: AppError = ValidationError::InvalidPhone("123".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("expected 10 digits"));
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = AppError::NotFound {
            entity: "Customers".to_string(),
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Customers with ID 42 not found");
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(!err.is_constraint_violation());
    }
}
