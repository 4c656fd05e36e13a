//! The address book: records keyed by name.

pub mod address_book;

pub use address_book::AddressBook;
