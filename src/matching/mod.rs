//! Fuzzy matching utilities for contact search.
//!
//! This module matches records against a free-text query by name (fuzzy)
//! and by phone number (digits).

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, MatchResult, MatchType};
