/// Permissive base-10 coercion, in the manner of C's `strtoll`.
///
/// Leading whitespace is skipped, an optional sign is honoured, and digits are consumed up to the first non-digit.
/// No digits yields `0`; out of range values saturate.
pub(crate) fn coerce_i64(value: &str) -> i64 {
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut total: i64 = 0;

    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        // Accumulate towards the sign, so that i64::MIN is reachable.
        let next = if negative {
            total.checked_mul(10).and_then(|t| t.checked_sub(digit))
        } else {
            total.checked_mul(10).and_then(|t| t.checked_add(digit))
        };

        match next {
            Some(next) => total = next,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }

    total
}
