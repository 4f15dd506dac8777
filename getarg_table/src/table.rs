use std::collections::{HashMap, HashSet};
use std::env;

use crate::model::{bool_value, canonical_key, negated_key, OptionToken};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The option table parsed from a Cli argument vector.
///
/// Maps each canonical key (`-name`) to its raw value, where flag-only tokens map to the empty string.
/// The table is immutable once built; rebuild a new table rather than mutating an existing one.
///
/// ### Example
/// ```
/// # use getarg_table as getarg;
/// use getarg::ArgumentTable;
///
/// let table = ArgumentTable::parse(["program", "--rec=verbose", "-bar=1", "-nolisten"]);
///
/// assert_eq!(table.get_arg("-rec", ""), "verbose");
/// assert_eq!(table.get_int_arg("-bar", 0), 1);
/// assert!(!table.get_bool_arg_or("-listen", true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTable {
    pub(crate) values: HashMap<String, String>,
    pub(crate) literals: HashSet<String>,
}

impl ArgumentTable {
    /// Parse the argument vector into a table.
    ///
    /// The first token is the program name, and is skipped.
    /// Tokens not starting with `-` are ignored; when a key repeats, the final occurrence applies.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder().tokens(tokens).build()
    }

    /// Parse the argument vector of the hosting process.
    /// Tokens which are not valid unicode are converted lossily.
    pub fn from_env() -> Self {
        Self::parse(env::args_os().map(|token| token.to_string_lossy().into_owned()))
    }

    /// Start a [`TableBuilder`].
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Parse a whitespace separated command line, as if preceded by a program name.
    /// For example, `from_command_line("-rec -bar=12")` is equivalent to `parse(["program", "-rec", "-bar=12"])`.
    #[cfg(any(test, feature = "unit_test"))]
    pub fn from_command_line(line: &str) -> Self {
        Self::parse(std::iter::once("test-program").chain(line.split_whitespace()))
    }

    /// Whether the key was specified (`-name`, `--name`, and `name` are equivalent).
    /// Negated forms are not considered.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&canonical_key(key))
    }

    /// The number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the `(key, value)` pairs, ordered by key.
    pub fn iter(&self) -> std::vec::IntoIter<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(&canonical_key(key)).map(String::as_str)
    }
}

#[derive(Debug)]
enum SoftValue {
    Arg { key: String, value: String },
    Bool { key: String, value: bool },
}

/// Assembles an [`ArgumentTable`].
///
/// Beyond the argument vector, the builder accepts *soft* values (applied only when the Cli did not specify
/// the key) and *literal* keys (real option names that happen to start with `no`).
///
/// ### Example
/// ```
/// # use getarg_table as getarg;
/// use getarg::ArgumentTable;
///
/// let table = ArgumentTable::builder()
///     .tokens(["program", "-port=18333", "-notify"])
///     .soft_set_arg("-port", "8333")
///     .soft_set_bool_arg("-listen", true)
///     .literal("-notify")
///     .build();
///
/// assert_eq!(table.get_int_arg("-port", 0), 18333);
/// assert!(table.get_bool_arg("-listen"));
/// assert!(table.get_bool_arg("-notify"));
/// assert!(table.get_bool_arg_or("-tify", true));
/// ```
#[derive(Debug, Default)]
pub struct TableBuilder {
    tokens: Vec<String>,
    soft_values: Vec<SoftValue>,
    literals: HashSet<String>,
}

impl TableBuilder {
    /// Set the argument vector, including the leading program name.
    /// If repeated, only the final argument vector will apply.
    pub fn tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokens = tokens
            .into_iter()
            .map(|token| token.as_ref().to_string())
            .collect();
        self
    }

    /// Set `key` to `value`, unless the argument vector specifies `key`.
    /// Among repeated soft values for the same key, the first applies.
    pub fn soft_set_arg(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.soft_values.push(SoftValue::Arg {
            key: canonical_key(key.as_ref()),
            value: value.into(),
        });
        self
    }

    /// Set `key` to `value` (as `1` or `0`), unless the argument vector specifies either `key` or its negated form.
    /// Among repeated soft values for the same key, the first applies.
    pub fn soft_set_bool_arg(mut self, key: impl AsRef<str>, value: bool) -> Self {
        self.soft_values.push(SoftValue::Bool {
            key: canonical_key(key.as_ref()),
            value,
        });
        self
    }

    /// Declare `key` as a real option name, so it is never read as the negated form of another key.
    /// For example, `literal("-notify")` keeps `-notify` from turning `-tify` off.
    pub fn literal(mut self, key: impl AsRef<str>) -> Self {
        self.literals.insert(canonical_key(key.as_ref()));
        self
    }

    /// Build the table.
    pub fn build(self) -> ArgumentTable {
        let TableBuilder {
            tokens,
            soft_values,
            literals,
        } = self;
        let mut values: HashMap<String, String> = HashMap::default();

        for token in tokens.iter().skip(1) {
            match OptionToken::parse(token) {
                Some(OptionToken { key, value }) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        if let Some(previous) = values.get(&key) {
                            debug!("Token '{token}' replaces '{previous}' for key '{key}'.");
                        }
                    }

                    values.insert(key, value);
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping non-option token '{token}'.");
                    }
                }
            }
        }

        for soft_value in soft_values {
            let (key, value, specified) = match soft_value {
                SoftValue::Arg { key, value } => {
                    let specified = values.contains_key(&key);
                    (key, value, specified)
                }
                SoftValue::Bool { key, value } => {
                    let negated = negated_key(&key);
                    let specified = values.contains_key(&key)
                        || (values.contains_key(&negated) && !literals.contains(&negated));
                    (key, bool_value(value).to_string(), specified)
                }
            };

            if specified {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Soft value '{value}' for key '{key}' is overridden by the Cli.");
                }
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Applying soft value '{value}' for key '{key}'.");
                }

                values.insert(key, value);
            }
        }

        ArgumentTable { values, literals }
    }
}
