//! `getarg` is a permissive command line option table for Rust.
//!
//! Where most command line parsers are configured up front with the parameters a program accepts, `getarg` is not.
//! It captures every `-key=value` token of the argument vector into an [`ArgumentTable`], and lets the program ask for
//! the keys it cares about, at the type it wants, with the default it wants.
//! `getarg` prioritizes the following concerns:
//! * *Permissive parsing*:
//! Nothing on the Cli is an error.
//! Tokens which are not options are ignored, and values which are not numbers coerce to `0`.
//! * *Defaults at the call site*:
//! Each lookup carries its own default, which applies only when the key is entirely absent.
//! * *Negated flags*:
//! Every boolean `-name` may be turned off with `-noname`, without declaring anything.
//! * *Immutable table*:
//! The table is built once and never mutated, so it may be shared freely (it is `Send + Sync`).
//!
//! # Usage
//! via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/node_flags.rs")]
//! ```
//!
//! ```console
//! $ node_flags
//! datadir: ~/.node
//! port: 8333
//! listen: true
//! upnp: true
//!
//! $ node_flags --datadir=/srv/node -port=NaN -nolisten -upnp=0
//! datadir: /srv/node
//! port: 0
//! listen: false
//! upnp: false
//! ```
//!
//! or via [derive Api](./derive/index.html), to populate a settings struct.
//!
//! # Cli Semantics
//! `getarg` reads the Cli tokens according to the following set of rules.
//!
//! * The first token is the program name, and is skipped.
//! * Tokens not starting with `-` are ignored.
//! * `-name` and `--name` are equivalent; both are stored under the key `-name`.
//! Keys are case sensitive.
//! * The value of an option follows the first `=` character.
//! For example, `-key=123=456` has the value `123=456`.
//! An option without `=` (a flag) has the empty value, as does `-key=`.
//! * When a key repeats, the final occurrence applies.
//! For example, `-port=1 -port=2` has the value `2`.
//! * There are no space separated values and no clustered short options.
//! For example, `-port 8333` is the flag `-port` followed by the ignored token `8333`.
//!
//! ### Accessors
//! ```console
//! Accessor                        | Key specified                           | Key absent
//! ------------------------------------------------------------------------------------------------------
//! get_arg(key, default)           | raw value (possibly empty)              | default
//! get_int_arg(key, default)       | leading integer of the value, else 0    | default
//! get_bool_arg_or(key, default)   | false if the value is `0`, else true    | via `-no` + name, else default
//! get_bool_arg(key)               | (same as get_bool_arg_or(key, false))   |
//! parse_arg::<T>(key)             | Ok(Some(T)), or Err(InvalidConversion)  | Ok(None)
//! ```
//!
//! ### Negation
//! When `-name` is absent and `-noname` is present, the boolean accessors resolve `-name` to the opposite of `-noname`.
//! For example, `-nolisten` (or `-nolisten=1`) turns `-listen` off, and `-nolisten=0` turns it on.
//! The key itself always takes precedence, regardless of order: `-nolisten -listen` is on.
//!
//! Negation is a plain prefix rule, so `-notify` also turns off `-tify`.
//! Use [`TableBuilder::literal`] to declare such keys as real option names.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while building the table and resolving negations.
pub mod derive;
pub use getarg_table::*;
