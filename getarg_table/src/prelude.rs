//! Traits which, typically, may be imported without concern: `use getarg::prelude::*`.

use crate::api::InvalidConversion;
use crate::table::ArgumentTable;

/// Behaviour to resolve a value of `Self` from an [`ArgumentTable`].
///
/// `String`, `i64`, and `bool` resolve through the permissive accessors, so they never fail.
/// `Option<T>` resolves through [`ArgumentTable::parse_arg`], and fails when the value does not convert to `T`.
// Needs to be imported in order to implement a custom `Lookup`.
pub trait Lookup: Sized {
    /// Resolve `key` from the table, falling back to `default` (or the type's natural default when `None`).
    fn lookup(
        table: &ArgumentTable,
        key: &str,
        default: Option<Self>,
    ) -> Result<Self, InvalidConversion>;
}

/// Behaviour for a settings struct that is populated from an [`ArgumentTable`].
///
/// Typically implemented via `#[derive(FromArgs)]`.
pub trait FromArgs: Sized {
    /// Populate the settings from the table.
    fn from_table(table: &ArgumentTable) -> Result<Self, InvalidConversion>;

    /// Populate the settings from the hosting process's argument vector.
    /// If a value cannot be converted, prints the error and exits with error code `1` (via [`std::process::exit`]).
    fn from_env_args() -> Self {
        match Self::from_table(&ArgumentTable::from_env()) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
