//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, any number of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every phone and the birthday
/// went through field validation, so a record never holds invalid values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with a name and no phones or birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::any(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder: add an initial phone. An empty string adds nothing.
    pub fn with_phone(mut self, phone: &str) -> Result<Self, ValidationError> {
        if !phone.is_empty() {
            self.add_phone(phone)?;
        }
        Ok(self)
    }

    /// Builder: set the birthday. An empty string leaves it unset.
    pub fn with_birthday(mut self, birthday: &str) -> Result<Self, ValidationError> {
        if !birthday.is_empty() {
            self.set_birthday(birthday)?;
        }
        Ok(self)
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    /// - `BookError::Validation` if `new` is not a valid phone
    ///
    /// The record is unchanged on either error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let Some(index) = self.position_of(old) else {
            return Err(BookError::PhoneNotFound(old.to_string()));
        };

        let replacement = Phone::new(new)?;
        self.phones[index] = replacement;

        debug!("Edited phone {} -> {} for {}", old, new, self.name);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;

        self.phones.remove(index);
        debug!("Removed phone {} from {}", phone, self.name);
        Ok(())
    }

    /// Find the stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Set or replace the birthday.
    ///
    /// On error the previous birthday is kept.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        match self.birthday.as_mut() {
            Some(existing) => existing.set(birthday),
            None => {
                self.birthday = Some(Birthday::new(birthday)?);
                Ok(())
            }
        }
    }

    /// Remove the birthday.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local clock) until the next birthday.
    ///
    /// See [`Record::days_to_birthday_from`].
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month
    /// and day, or `None` when no birthday is set.
    ///
    /// The result counts calendar days between the two dates, so a birthday
    /// tomorrow gives 1 whatever the time of day; it is not the floored
    /// time gap from the current instant. A birthday falling on `today`
    /// gives 0. Once this year's date has passed the count runs to next
    /// year's. A Feb 29 birthday falls on Feb 28 in common years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();

        let mut next = anniversary(born, today.year())?;
        if next < today {
            next = anniversary(born, today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

/// The date `born`'s month and day land on in `year`.
fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, born.month(), born.day() - 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.value()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
