//! Insertion-ordered collection of records keyed by name.

use crate::config::BookConfig;
use crate::error::{BookError, BookResult};
use crate::matching::{ContactMatcher, MatchResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// An address book holding at most one record per name.
///
/// Records iterate in the order their names were first added. Adding a
/// record under an existing name replaces the old record in place.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John").with_phone("1234567890").unwrap());
/// book.add_record(Record::new("Jane"));
///
/// assert!(book.find("John").is_some());
/// let pages: Vec<usize> = book.iter_chunks(1).unwrap().map(|page| page.len()).collect();
/// assert_eq!(pages, vec![1, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
    config: BookConfig,
}

impl AddressBook {
    /// Create an empty address book with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty address book using `config` for paging and search.
    pub fn with_config(config: BookConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Settings this book pages and searches with.
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().value().to_string();
        match self.index.get(&name) {
            Some(&position) => {
                debug!("Replacing record {}", name);
                self.records[position] = record;
            }
            None => {
                debug!("Adding record {}", name);
                self.index.insert(name, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Run `f` on the record stored under `name` and return its result.
    ///
    /// If `f` leaves the record under a different name, the record is
    /// re-keyed as if deleted and added again: it replaces any record that
    /// already holds the new name, so names stay unique.
    pub fn edit<T>(&mut self, name: &str, f: impl FnOnce(&mut Record) -> T) -> Option<T> {
        let position = *self.index.get(name)?;
        let result = f(&mut self.records[position]);

        if self.records[position].name() != name {
            debug!(
                "Re-keying record {} as {}",
                name,
                self.records[position].name()
            );
            if let Some(record) = self.delete(name) {
                self.add_record(record);
            }
        }

        Some(result)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// Deleting a name that is not present does nothing and returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let position = self.index.remove(name)?;
        let record = self.records.remove(position);

        // Later records shifted down by one
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        debug!("Deleted record {}", name);
        Some(record)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().value())
    }

    /// Split the records, in order, into consecutive groups of at most
    /// `chunk_size`.
    ///
    /// Groups are produced lazily and every call starts from the first
    /// record. Only the last group may be shorter than `chunk_size`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidChunkSize` when `chunk_size` is zero.
    pub fn iter_chunks(&self, chunk_size: usize) -> BookResult<std::slice::Chunks<'_, Record>> {
        if chunk_size == 0 {
            return Err(BookError::InvalidChunkSize(chunk_size));
        }
        Ok(self.records.chunks(chunk_size))
    }

    /// [`AddressBook::iter_chunks`] with the configured page size.
    pub fn pages(&self) -> BookResult<std::slice::Chunks<'_, Record>> {
        self.iter_chunks(self.config.page_size)
    }

    /// Search names and phones, using the configured result limit and
    /// confidence threshold.
    pub fn search(&self, query: &str) -> Vec<MatchResult<'_>> {
        ContactMatcher::new().find_matches(
            query,
            &self.records,
            self.config.max_match_results,
            self.config.match_confidence_threshold,
        )
    }

    /// Records whose next birthday falls within `within_days` days of
    /// `today`, paired with the day count and ordered by it, then by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records
            .iter()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.1.cmp(&b.1)
                .then_with(|| a.0.name().value().cmp(b.0.name().value()))
        });
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchType;

    fn book_of(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_record(Record::new(*name));
        }
        book
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let book = book_of(&["John", "Jane"]);
        assert_eq!(book.len(), 2);
        assert_eq!(book.find("John").unwrap().name().value(), "John");
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn test_add_same_name_replaces_in_place() {
        let mut book = book_of(&["John", "Jane", "Alice"]);
        let replacement = Record::new("Jane").with_phone("1234567890").unwrap();
        book.add_record(replacement.clone());

        assert_eq!(book.len(), 3);
        assert_eq!(book.find("Jane"), Some(&replacement));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane", "Alice"]);
    }

    #[test]
    fn test_edit_changes_stored_record() {
        let mut book = book_of(&["John"]);
        let added = book.edit("John", |r| r.add_phone("1234567890"));
        assert_eq!(added, Some(Ok(())));
        assert!(book.find("John").unwrap().find_phone("1234567890").is_some());
        assert!(book.edit("Nobody", |_| ()).is_none());
    }

    #[test]
    fn test_edit_renaming_keeps_names_unique() {
        let mut book = book_of(&["John", "Alice"]);
        book.edit("John", |r| *r = Record::new("Jane"));

        assert!(book.find("John").is_none());
        assert_eq!(book.find("Jane").unwrap().name().value(), "Jane");

        book.add_record(Record::new("Jane").with_phone("1234567890").unwrap());
        let janes = book.names().filter(|n| *n == "Jane").count();
        assert_eq!(janes, 1);
        assert_eq!(book.len(), 2);
        assert!(book.find("Jane").unwrap().find_phone("1234567890").is_some());
    }

    #[test]
    fn test_edit_renaming_onto_existing_name_replaces_it() {
        let mut book = book_of(&["John", "Alice", "Bob"]);
        book.edit("John", |r| *r = Record::new("Bob").with_phone("1111111111").unwrap());

        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        assert!(book.find("Bob").unwrap().find_phone("1111111111").is_some());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = book_of(&["John", "Jane", "Alice"]);
        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().value(), "John");

        assert_eq!(book.len(), 2);
        assert!(book.find("John").is_none());
        // Index stays correct after the shift
        assert_eq!(book.find("Alice").unwrap().name().value(), "Alice");
        assert_eq!(book.find("Jane").unwrap().name().value(), "Jane");
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut book = book_of(&["John"]);
        assert!(book.delete("Nobody").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_re_add_after_delete_goes_to_end() {
        let mut book = book_of(&["John", "Jane"]);
        book.delete("John");
        book.add_record(Record::new("John"));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Jane", "John"]);
    }

    #[test]
    fn test_iter_chunks_sizes() {
        let book = book_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let sizes: Vec<usize> = book.iter_chunks(3).unwrap().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn test_iter_chunks_concatenation_preserves_order() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let book = book_of(&names);

        let flattened: Vec<&str> = book
            .iter_chunks(3)
            .unwrap()
            .flatten()
            .map(|r| r.name().value())
            .collect();
        assert_eq!(flattened, names);
    }

    #[test]
    fn test_iter_chunks_restarts_each_call() {
        let book = book_of(&["a", "b", "c", "d"]);
        let mut first = book.iter_chunks(2).unwrap();
        first.next();

        let mut second = book.iter_chunks(2).unwrap();
        assert_eq!(second.next().unwrap()[0].name().value(), "a");
        assert_eq!(first.next().unwrap()[0].name().value(), "c");
    }

    #[test]
    fn test_iter_chunks_zero_fails() {
        let book = book_of(&["a"]);
        assert_eq!(
            book.iter_chunks(0).unwrap_err(),
            BookError::InvalidChunkSize(0)
        );
    }

    #[test]
    fn test_iter_chunks_empty_book() {
        let book = AddressBook::new();
        assert_eq!(book.iter_chunks(3).unwrap().count(), 0);
    }

    #[test]
    fn test_pages_use_configured_size() {
        let config = BookConfig {
            page_size: 2,
            ..BookConfig::default()
        };
        let mut book = AddressBook::with_config(config);
        for name in ["a", "b", "c"] {
            book.add_record(Record::new(name));
        }

        let sizes: Vec<usize> = book.pages().unwrap().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![2, 1]);

        let default_sizes: Vec<usize> = book_of(&["a", "b", "c", "d"])
            .pages()
            .unwrap()
            .map(|c| c.len())
            .collect();
        assert_eq!(default_sizes, vec![3, 1]);
    }

    #[test]
    fn test_search() {
        let mut book = book_of(&["John Doe", "Jane Doe", "Alice Smith"]);
        book.edit("Alice Smith", |r| r.add_phone("0501234567"))
            .unwrap()
            .unwrap();

        let results = book.search("0501234567");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::ExactPhone);

        let results = book.search("doe");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_upcoming_birthdays() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Later").with_birthday("1990-12-01").unwrap());
        book.add_record(Record::new("Soon").with_birthday("1985-10-20").unwrap());
        book.add_record(Record::new("Today").with_birthday("2001-10-17").unwrap());
        book.add_record(Record::new("None"));

        let upcoming = book.upcoming_birthdays(date(2026, 10, 17), 7);
        let names: Vec<(&str, i64)> = upcoming
            .iter()
            .map(|(r, d)| (r.name().value(), *d))
            .collect();
        assert_eq!(names, vec![("Today", 0), ("Soon", 3)]);
    }

    #[test]
    fn test_into_iterator() {
        let book = book_of(&["a", "b"]);
        let mut count = 0;
        for _record in &book {
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
