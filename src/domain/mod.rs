//! Domain value objects and types.
//!
//! This module contains validated fields for the parts of a contact: name,
//! phone number and birthday. Each field checks its value on construction
//! and on every write, so invalid data is never stored.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{AnyValue, Field, FieldRule};
pub use name::Name;
pub use phone::Phone;
