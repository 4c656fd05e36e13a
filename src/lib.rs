//! Contact Book - an in-memory address book with validated contact fields.
//!
//! Records hold a name, any number of phone numbers and an optional
//! birthday. Every field validates its value on construction and on each
//! write, so a stored record is always well formed.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (name, phone, birthday)
//! - **models**: The contact record
//! - **book**: The address book keyed by name, with chunked iteration
//! - **matching**: Fuzzy name and phone search
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: Optional tracing subscriber setup

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod matching;
pub mod models;

pub use book::AddressBook;
pub use config::BookConfig;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::Record;
