use thiserror::Error;

/// The value of a key could not be converted to the requested type.
///
/// Only the strict accessor [`ArgumentTable::parse_arg`](crate::ArgumentTable::parse_arg) (and what builds on it) produces this error;
/// the permissive accessors always fall back to a default or `0`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' (from '{key}') to {type_name}.")]
pub struct InvalidConversion {
    /// The canonical key looked up.
    pub key: String,
    /// The raw value of the key.
    pub token: String,
    /// The name of the requested type.
    pub type_name: &'static str,
}
