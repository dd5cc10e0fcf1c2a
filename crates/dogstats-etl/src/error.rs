//! Error types for the ETL pipeline
//!
//! Failure taxonomy: connectivity failures (store or API unreachable) and
//! constraint violations propagate uncaught and abort the run; malformed
//! lifespan text is recoverable at record granularity and never reaches
//! this type (the loader skips the record's lifespan row instead).

use crate::lifespan::LifespanParseError;
use thiserror::Error;

/// Result type alias for ETL operations
pub type Result<T> = std::result::Result<T, EtlError>;

/// Error type for the ETL pipeline
#[derive(Error, Debug)]
pub enum EtlError {
    /// Database operation failed. Includes constraint violations (duplicate
    /// owner email, missing foreign key), which are not recovered from.
    #[error("Database error: {0}. Check the database URL and file permissions.")]
    Database(#[from] sqlx::Error),

    /// Breed API request failed (network error or non-2xx status)
    #[error("Breed API request failed: {0}. Check your internet connection and API URL.")]
    Http(#[from] reqwest::Error),

    /// Lifespan text could not be parsed into a (min, max) range
    #[error(transparent)]
    Lifespan(#[from] LifespanParseError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// File system operation failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}
