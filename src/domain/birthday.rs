//! Birthday value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Format birthdays are written in.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile ISO date regex")
});

/// Rule for [`Birthday`]: an ISO `YYYY-MM-DD` string naming a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDate;

impl IsoDate {
    fn parse(value: &str) -> Result<NaiveDate, ValidationError> {
        if !ISO_DATE_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidBirthday {
                value: value.to_string(),
                reason: "malformed date".to_string(),
            });
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|e| {
            ValidationError::InvalidBirthday {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

impl FieldRule for IsoDate {
    fn validate(value: &str) -> Result<(), ValidationError> {
        Self::parse(value).map(|_| ())
    }
}

/// A validated birthday.
///
/// The original string is stored; [`Birthday::date`] parses it on demand.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-07-15").unwrap();
/// assert_eq!(birthday.value(), "1990-07-15");
/// assert!(Birthday::new("2023-02-30").is_err());
/// ```
pub type Birthday = Field<IsoDate>;

impl Field<IsoDate> {
    /// Parse the stored string into a calendar date.
    pub fn date(&self) -> NaiveDate {
        // SAFETY: Constructor and setter only store strings that parse
        IsoDate::parse(self.value()).expect("birthday validated as YYYY-MM-DD")
    }
}
