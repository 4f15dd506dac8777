//! Runtime module for `getarg`.
//! See the `getarg` crate documentation root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod table;
#[allow(missing_docs)]
pub mod prelude;

pub use api::InvalidConversion;
pub use table::{ArgumentTable, TableBuilder};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
