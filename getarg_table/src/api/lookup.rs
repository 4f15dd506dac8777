use std::str::FromStr;

use crate::api::capture::InvalidConversion;
use crate::prelude::Lookup;
use crate::table::ArgumentTable;

impl Lookup for String {
    fn lookup(
        table: &ArgumentTable,
        key: &str,
        default: Option<Self>,
    ) -> Result<Self, InvalidConversion> {
        let default = default.unwrap_or_default();
        Ok(table.get_arg(key, &default).to_string())
    }
}

impl Lookup for i64 {
    fn lookup(
        table: &ArgumentTable,
        key: &str,
        default: Option<Self>,
    ) -> Result<Self, InvalidConversion> {
        Ok(table.get_int_arg(key, default.unwrap_or_default()))
    }
}

impl Lookup for bool {
    fn lookup(
        table: &ArgumentTable,
        key: &str,
        default: Option<Self>,
    ) -> Result<Self, InvalidConversion> {
        Ok(table.get_bool_arg_or(key, default.unwrap_or_default()))
    }
}

impl<T: FromStr> Lookup for Option<T> {
    fn lookup(
        table: &ArgumentTable,
        key: &str,
        default: Option<Self>,
    ) -> Result<Self, InvalidConversion> {
        match table.parse_arg::<T>(key)? {
            Some(value) => Ok(Some(value)),
            None => Ok(default.flatten()),
        }
    }
}
