//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field rejected its value
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone in the record equals the requested one
    #[error("Phone not found in record: {0}")]
    PhoneNotFound(String),

    /// Chunked iteration requested with a zero chunk size
    #[error("Chunk size must be positive, got {0}")]
    InvalidChunkSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
