//! Generic validated field.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Acceptance rule for a [`Field`].
///
/// `validate` must be total and free of side effects: it only inspects the
/// candidate and reports whether it may be stored.
pub trait FieldRule {
    /// Check a candidate value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` when the value is rejected.
    fn validate(value: &str) -> Result<(), ValidationError>;
}

/// Rule that accepts every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyValue;

impl FieldRule for AnyValue {
    fn validate(_value: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A single string value guarded by the rule `R`.
///
/// The stored value always satisfies `R`: construction and [`Field::set`]
/// validate first and only then commit, so a rejected write never changes
/// what [`Field::value`] returns.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let mut phone = Phone::new("0501234567").unwrap();
/// assert!(phone.set("not-a-phone").is_err());
/// assert_eq!(phone.value(), "0501234567");
/// ```
pub struct Field<R> {
    value: String,
    rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Create a new field, validating the value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        R::validate(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Replace the stored value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` and keeps the previous value if
    /// the new one is rejected.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let value = value.into();
        R::validate(&value)?;
        self.value = value;
        Ok(())
    }

    /// Check a candidate against this field's rule without building a field.
    pub fn is_valid(value: &str) -> bool {
        R::validate(value).is_ok()
    }
}

impl Field<AnyValue> {
    /// Create a field under the accept-all rule, which cannot fail.
    pub fn any(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            rule: PhantomData,
        }
    }
}

impl<R> Field<R> {
    /// Get the stored value as a string slice.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls so `R` carries no trait bounds of its own.
impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.value).finish()
    }
}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Field<R> {}

impl<R> std::hash::Hash for Field<R> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R> PartialEq<str> for Field<R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R> PartialEq<&str> for Field<R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<R> PartialEq<String> for Field<R> {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

// Serde support - serialize as string
impl<R> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl<R> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
