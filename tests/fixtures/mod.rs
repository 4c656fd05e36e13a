//! Shared test fixtures.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Names `Contact 0` through `Contact n-1`.
pub fn contact_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Contact {}", i)).collect()
}

/// A ten-digit phone derived from `i`.
pub fn phone_for(i: usize) -> String {
    format!("{:010}", 5_000_000_000_u64 + i as u64)
}

/// An address book with `n` records, each holding one phone.
pub fn seeded_book(n: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for (i, name) in contact_names(n).into_iter().enumerate() {
        let record = Record::new(name)
            .with_phone(&phone_for(i))
            .expect("fixture phones are valid");
        book.add_record(record);
    }
    book
}

/// Shorthand for a calendar date.
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}
