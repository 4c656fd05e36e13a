//! Configuration management for the contact book.
//!
//! Defaults can be overridden through environment variables, optionally
//! loaded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing::warn;

/// Page size used by `AddressBook::pages` unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Configuration for an address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    /// Records per page for chunked iteration (default: 3)
    pub page_size: usize,

    /// Maximum number of search results to return (default: 5)
    pub max_match_results: usize,

    /// Search confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl BookConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page (default: 3)
    /// - `CONTACT_BOOK_MAX_MATCHES`: Max search results (default: 5)
    /// - `CONTACT_BOOK_MATCH_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            warn!("Rejecting zero CONTACT_BOOK_PAGE_SIZE");
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let max_match_results = Self::parse_env_usize("CONTACT_BOOK_MAX_MATCHES", 5)?;
        let match_confidence_threshold =
            Self::parse_env_u8("CONTACT_BOOK_MATCH_THRESHOLD", 30)?;

        if match_confidence_threshold > 100 {
            warn!(
                "Rejecting CONTACT_BOOK_MATCH_THRESHOLD {}",
                match_confidence_threshold
            );
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_MATCH_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(BookConfig {
            page_size,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        BookConfig {
            page_size: DEFAULT_PAGE_SIZE,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "warn".to_string(),
        }
    }
}
