//! Derive Api for `getarg` settings structs.
//!
//! ### Getting Started
//! Instrument a settings struct `S` with `#[derive(FromArgs)]`.
//! This implements [`FromArgs`] for `S`, which provides both `S::from_table(&table)` and `S::from_env_args()`.
//!
//! ```no_run
#![doc = include_str!("../demos/node_settings.rs")]
//! ```
//!
//! ```console
//! $ node_settings -datadir=/srv/node --nolisten -maxconnections=40
//! Settings { data_dir: "/srv/node", port: 8333, listen: false, max_connections: Some(40) }
//!
//! $ node_settings -maxconnections=many
//! cannot convert 'many' (from '-maxconnections') to u16.
//! ```
//!
//! ### Field Configuration
//! Each field resolves through [`Lookup`](crate::prelude::Lookup) for its type:
//! ```console
//! Type        | Accessor                              | Without default
//! ---------------------------------------------------------------------
//! String      | ArgumentTable::get_arg                | ""
//! i64         | ArgumentTable::get_int_arg            | 0
//! bool        | ArgumentTable::get_bool_arg_or        | false
//! Option<T>   | ArgumentTable::parse_arg (strict)     | None
//! ```
//!
//! The key is the field name with a leading dash (ex: `port` reads `-port`).
//! The explicit field attributes are:
//! * `#[getarg(name = "..")]` to read a different key (ex: `name = "datadir"` reads `-datadir`).
//! * `#[getarg(default = EXPR)]` to fall back on `EXPR` when the key is not specified.
//! `EXPR` is converted into the field type via [`Into`].
//!
//! Only `Option<T>` fields may fail: `from_table` returns the [`InvalidConversion`](crate::InvalidConversion), while `from_env_args` prints it and exits with error code `1`.
pub use getarg_derive::FromArgs;
pub use getarg_table::prelude::FromArgs;
