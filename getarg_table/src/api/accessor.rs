use std::str::FromStr;

use crate::api::capture::InvalidConversion;
use crate::api::numeric::coerce_i64;
use crate::model::{canonical_key, is_truthy, negated_key};
use crate::table::ArgumentTable;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl ArgumentTable {
    /// Get the raw value of `key`, or `default` when the key was not specified.
    ///
    /// A flag-only token (`-name`) and an empty assignment (`-name=`) both yield the empty string, not the default.
    ///
    /// ### Example
    /// ```
    /// # use getarg_table as getarg;
    /// use getarg::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse(["program", "-rec", "--bar=eleven"]);
    ///
    /// assert_eq!(table.get_arg("-rec", "default"), "");
    /// assert_eq!(table.get_arg("-bar", "default"), "eleven");
    /// assert_eq!(table.get_arg("-baz", "default"), "default");
    /// ```
    pub fn get_arg<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.raw(key).unwrap_or(default)
    }

    /// Get the value of `key` as an integer, or `default` when the key was not specified.
    ///
    /// The value is coerced permissively: digits are read up to the first non-digit, and a value without digits is `0`.
    /// Notice, this means `0` is returned both for `-name=0` and for `-name=NaN`.
    ///
    /// ### Example
    /// ```
    /// # use getarg_table as getarg;
    /// use getarg::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse(["program", "-rec=11", "-bar=NaN"]);
    ///
    /// assert_eq!(table.get_int_arg("-rec", 0), 11);
    /// assert_eq!(table.get_int_arg("-bar", 1), 0);
    /// assert_eq!(table.get_int_arg("-baz", 1), 1);
    /// ```
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.raw(key).map(coerce_i64).unwrap_or(default)
    }

    /// Get the value of `key` as a boolean, or `false` when neither the key nor its negated form was specified.
    /// See [`ArgumentTable::get_bool_arg_or`].
    pub fn get_bool_arg(&self, key: &str) -> bool {
        self.get_bool_arg_or(key, false)
    }

    /// Get the value of `key` as a boolean, or `default` when neither the key nor its negated form was specified.
    ///
    /// Resolution:
    /// 1. When `-name` is specified, it is `true` unless its value is exactly `0`.
    /// 2. Otherwise, when `-noname` is specified, it is the opposite of rule 1 applied to `-noname`.
    /// 3. Otherwise, `default`.
    ///
    /// The key itself always takes precedence over its negated form, regardless of their order on the Cli.
    ///
    /// ### Example
    /// ```
    /// # use getarg_table as getarg;
    /// use getarg::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse(["program", "-norec", "-bar=0", "-nobar", "-noqux=0"]);
    ///
    /// assert!(!table.get_bool_arg_or("-rec", true));
    /// assert!(!table.get_bool_arg_or("-bar", true));
    /// assert!(table.get_bool_arg_or("-qux", false));
    /// assert!(table.get_bool_arg_or("-baz", true));
    /// ```
    pub fn get_bool_arg_or(&self, key: &str, default: bool) -> bool {
        let key = canonical_key(key);

        if let Some(value) = self.values.get(&key) {
            return is_truthy(value);
        }

        let negated = negated_key(&key);

        if self.literals.contains(&negated) {
            return default;
        }

        match self.values.get(&negated) {
            Some(value) => {
                let resolved = !is_truthy(value);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Key '{key}' resolves to {resolved} via '{negated}={value}'.");
                }
                resolved
            }
            None => default,
        }
    }

    /// Get the value of `key` converted via [`FromStr`], or `None` when the key was not specified.
    ///
    /// Unlike the other accessors, this does not coerce: a value which `T` rejects is an error.
    ///
    /// ### Example
    /// ```
    /// # use getarg_table as getarg;
    /// use getarg::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse(["program", "-port=8333", "-rpcport=abc"]);
    ///
    /// assert_eq!(table.parse_arg::<u16>("-port").unwrap(), Some(8333));
    /// assert_eq!(table.parse_arg::<u16>("-maxconnections").unwrap(), None);
    /// assert!(table.parse_arg::<u16>("-rpcport").is_err());
    /// ```
    pub fn parse_arg<T: FromStr>(&self, key: &str) -> Result<Option<T>, InvalidConversion> {
        match self.raw(key) {
            Some(token) => T::from_str(token)
                .map(Some)
                .map_err(|_| InvalidConversion {
                    key: canonical_key(key),
                    token: token.to_string(),
                    type_name: std::any::type_name::<T>(),
                }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_word(length: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    #[rstest]
    #[case("", "", "")]
    #[case("", "eleven", "eleven")]
    #[case("-rec -bar", "", "")]
    #[case("-rec -bar", "eleven", "")]
    #[case("-rec=", "", "")]
    #[case("-rec=", "eleven", "")]
    #[case("-rec=11", "", "11")]
    #[case("-rec=11", "eleven", "11")]
    #[case("-rec=eleven", "", "eleven")]
    #[case("-rec=eleven", "eleven", "eleven")]
    #[case("--rec=verbose --bar=1", "", "verbose")]
    #[case("-rec=-bar=1", "", "-bar=1")]
    #[case("-norec", "eleven", "eleven")]
    #[case("-rec=1 -rec=2", "", "2")]
    fn string_arg(#[case] line: &str, #[case] default: &str, #[case] expected: &str) {
        // Setup
        let table = ArgumentTable::from_command_line(line);

        // Execute & verify
        assert_eq!(table.get_arg("-rec", default), expected);
    }

    #[rstest]
    #[case("", "-rec", 11, 11)]
    #[case("", "-rec", 0, 0)]
    #[case("-rec -bar", "-rec", 11, 0)]
    #[case("-rec -bar", "-bar", 11, 0)]
    #[case("-rec=11 -bar=12", "-rec", 0, 11)]
    #[case("-rec=11 -bar=12", "-bar", 11, 12)]
    #[case("-rec=NaN -bar=NotANumber", "-rec", 1, 0)]
    #[case("-rec=NaN -bar=NotANumber", "-bar", 11, 0)]
    #[case("--rec=verbose --bar=1", "-bar", 0, 1)]
    #[case("-rec=-5", "-rec", 0, -5)]
    #[case("-rec=12abc", "-rec", 0, 12)]
    fn int_arg(#[case] line: &str, #[case] key: &str, #[case] default: i64, #[case] expected: i64) {
        // Setup
        let table = ArgumentTable::from_command_line(line);

        // Execute & verify
        assert_eq!(table.get_int_arg(key, default), expected);
    }

    #[rstest]
    #[case("-rec", "-rec", true, true, true)]
    #[case("-rec", "-fo", false, false, true)]
    #[case("-rec", "-reco", false, false, true)]
    #[case("-rec=0", "-rec", false, false, false)]
    #[case("-rec=1", "-rec", true, true, true)]
    #[case("-rec=verbose", "-rec", true, true, true)]
    #[case("-rec=", "-rec", true, true, true)]
    #[case("-rec=00", "-rec", true, true, true)]
    #[case("-norec", "-rec", false, false, false)]
    #[case("-norec=1", "-rec", false, false, false)]
    #[case("-norec=0", "-rec", true, true, true)]
    #[case("-rec -norec", "-rec", true, true, true)]
    #[case("-norec -rec", "-rec", true, true, true)]
    #[case("-rec=1 -norec=1", "-rec", true, true, true)]
    #[case("-rec=0 -norec=0", "-rec", false, false, false)]
    #[case("-norec=0 -rec=0", "-rec", false, false, false)]
    #[case("--rec", "-rec", true, true, true)]
    #[case("--rec=1", "-rec", true, true, true)]
    #[case("--norec=1", "-rec", false, false, false)]
    #[case("-rec --norec", "-rec", true, true, true)]
    #[case("-norec", "--rec", false, false, false)]
    #[case("-norec", "rec", false, false, false)]
    fn bool_arg(
        #[case] line: &str,
        #[case] key: &str,
        #[case] expected: bool,
        #[case] expected_default_false: bool,
        #[case] expected_default_true: bool,
    ) {
        // Setup
        let table = ArgumentTable::from_command_line(line);

        // Execute & verify
        assert_eq!(table.get_bool_arg(key), expected);
        assert_eq!(table.get_bool_arg_or(key, false), expected_default_false);
        assert_eq!(table.get_bool_arg_or(key, true), expected_default_true);
    }

    #[test]
    fn bool_arg_negation_is_prefix_rule() {
        // Setup
        let table = ArgumentTable::from_command_line("-notify");

        // Execute & verify
        assert!(table.get_bool_arg("-notify"));
        assert!(!table.get_bool_arg_or("-tify", true));
    }

    #[test]
    fn bool_arg_literal() {
        // Setup
        let table = ArgumentTable::builder()
            .tokens(["program", "-notify", "-nolisten"])
            .literal("--notify")
            .build();

        // Execute & verify
        assert!(table.get_bool_arg("-notify"));
        assert!(table.get_bool_arg_or("-tify", true));
        assert!(!table.get_bool_arg_or("-tify", false));
        assert!(!table.get_bool_arg_or("-listen", true));
    }

    #[test]
    fn dash_count_invariance() {
        for _ in 0..100 {
            // Setup
            let name = random_word(thread_rng().gen_range(1..12));
            let value = random_word(thread_rng().gen_range(0..12));
            let single = ArgumentTable::parse(["program".to_string(), format!("-{name}={value}")]);
            let double = ArgumentTable::parse(["program".to_string(), format!("--{name}={value}")]);
            let key = format!("-{name}");

            // Execute & verify
            assert_eq!(single, double);
            assert_eq!(single.get_arg(&key, "default"), value);
            assert_eq!(double.get_arg(&key, "default"), value);
        }
    }

    #[test]
    fn explicit_wins_in_any_order() {
        for _ in 0..100 {
            // Setup
            let positive = if thread_rng().gen() { "-rec=0" } else { "-rec=1" };
            let negative = if thread_rng().gen() { "-norec=0" } else { "-norec=1" };
            let tokens = if thread_rng().gen() {
                ["program", positive, negative]
            } else {
                ["program", negative, positive]
            };
            let table = ArgumentTable::parse(tokens);

            // Execute & verify
            assert_eq!(table.get_bool_arg("-rec"), positive == "-rec=1");
        }
    }

    #[rstest]
    #[case("-port=8333", Some(8333))]
    #[case("--port=0", Some(0))]
    #[case("", None)]
    #[case("-noport", None)]
    fn parse_arg(#[case] line: &str, #[case] expected: Option<u16>) {
        // Setup
        let table = ArgumentTable::from_command_line(line);

        // Execute
        let result = table.parse_arg::<u16>("-port");

        // Verify
        assert_eq!(result.unwrap(), expected);
    }

    #[rstest]
    #[case("-port=abc", "abc")]
    #[case("-port", "")]
    #[case("-port=70000", "70000")]
    #[case("-port=12abc", "12abc")]
    fn parse_arg_invalid(#[case] line: &str, #[case] token: &str) {
        // Setup
        let table = ArgumentTable::from_command_line(line);

        // Execute
        let result = table.parse_arg::<u16>("port");

        // Verify
        assert_matches!(result, Err(InvalidConversion { .. }));
        assert_eq!(
            result.unwrap_err(),
            InvalidConversion {
                key: "-port".to_string(),
                token: token.to_string(),
                type_name: "u16",
            }
        );
    }
}
