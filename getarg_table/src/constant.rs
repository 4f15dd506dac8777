pub(crate) const DASH: char = '-';
pub(crate) const SEPARATOR: char = '=';
pub(crate) const NEGATION_PREFIX: &str = "no";
pub(crate) const FALSE_VALUE: &str = "0";
pub(crate) const TRUE_VALUE: &str = "1";
