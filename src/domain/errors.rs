//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a field rejects a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a real date in `YYYY-MM-DD` form.
    #[error("Invalid birthday '{value}': {reason} (expected YYYY-MM-DD)")]
    InvalidBirthday { value: String, reason: String },
}
