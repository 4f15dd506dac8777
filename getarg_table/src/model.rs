use crate::constant::*;

/// A Cli token shaped as an option: `-name`, `--name`, `-name=value`, or `--name=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionToken {
    pub key: String,
    pub value: String,
}

impl OptionToken {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        if !token.starts_with(DASH) {
            return None;
        }

        // Only the first '=' separates; the rest belongs to the value.
        let (name, value) = token.split_once(SEPARATOR).unwrap_or((token, ""));

        Some(Self {
            key: canonical_key(name),
            value: value.to_string(),
        })
    }
}

/// Normalize `name`, `-name`, and `--name` onto `-name`.
pub(crate) fn canonical_key(key: &str) -> String {
    let name = key.strip_prefix(DASH).unwrap_or(key);
    let name = name.strip_prefix(DASH).unwrap_or(name);
    format!("{DASH}{name}")
}

/// The negated form of a canonical key: `-rec` becomes `-norec`.
pub(crate) fn negated_key(canonical: &str) -> String {
    let name = canonical.strip_prefix(DASH).unwrap_or(canonical);
    format!("{DASH}{NEGATION_PREFIX}{name}")
}

pub(crate) fn is_truthy(value: &str) -> bool {
    value != FALSE_VALUE
}

pub(crate) fn bool_value(value: bool) -> &'static str {
    if value {
        TRUE_VALUE
    } else {
        FALSE_VALUE
    }
}
