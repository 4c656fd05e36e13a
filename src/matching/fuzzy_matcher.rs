//! Fuzzy matching implementation for contact search.
//!
//! This module provides contact matching with:
//! - Exact and partial matching on phone digits
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::models::Record;

/// Shortest digit run treated as a partial phone query.
const MIN_PHONE_FRAGMENT: usize = 3;

/// A match result borrowing the matched record.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Query equals one of the record's phones
    ExactPhone,

    /// Query digits appear inside one of the record's phones
    PartialPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query`.
    ///
    /// # Arguments
    /// * `query` - Free text: a name, a full phone number or a digit fragment
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name
    pub fn find_matches<'a>(
        &self,
        query: &str,
        records: impl IntoIterator<Item = &'a Record>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = query.trim();
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        if query.is_empty() {
            return results;
        }

        for record in records {
            // Phone matches take priority over names
            if let Some((confidence, match_type)) = self.match_phone(query, record) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type,
                    });
                }
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name().value()) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().value().cmp(b.record.name().value()))
        });

        results.truncate(max_results);

        results
    }

    /// Match a digit query against the record's phones.
    ///
    /// Exact matches score 100; a fragment of at least three digits scores
    /// by how much of the number it covers.
    fn match_phone(&self, query: &str, record: &Record) -> Option<(u8, MatchType)> {
        let digits = Self::normalize_phone(query);
        if digits.len() < MIN_PHONE_FRAGMENT || digits.len() != query.len() {
            return None;
        }

        let mut best: Option<(u8, MatchType)> = None;
        for phone in record.phones() {
            if phone == digits.as_str() {
                return Some((100, MatchType::ExactPhone));
            }
            if phone.value().contains(&digits) {
                let ratio = digits.len() as f64 / phone.value().len() as f64;
                let confidence = (85.0 * ratio + 10.0) as u8;
                if best.map_or(true, |(c, _)| confidence > c) {
                    best = Some((confidence, MatchType::PartialPhone));
                }
            }
        }

        best
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phones).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rolling rows instead of the full matrix
        let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut curr = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            curr[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[s2_chars.len()]
    }

    /// Strip everything but ASCII digits from a phone query.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
