//! Name value object.

use super::field::{AnyValue, Field};

/// A contact's name.
///
/// Names accept any value; the address book keys records by it.
pub type Name = Field<AnyValue>;
