//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Rule for [`Phone`]: exactly ten ASCII decimal digits.
///
/// Formatting characters, country codes and shorter local numbers are all
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TenDigits;

impl FieldRule for TenDigits {
    fn validate(value: &str) -> Result<(), ValidationError> {
        if value.len() == PHONE_DIGITS && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.to_string()))
        }
    }
}

/// A validated phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.value(), "0501234567");
/// assert!(Phone::new("050-123-4567").is_err());
/// ```
pub type Phone = Field<TenDigits>;
