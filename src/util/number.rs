#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Parse the integer prefix of `raw` the way browsers parse base-10 ints.
///
/// Leading whitespace and a single sign are accepted, then as many ASCII
/// digits as follow. Trailing garbage is ignored (`"5 items"` is 5).
/// Returns `None` when no digit is found. Saturates instead of overflowing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Clamp a signed count into the non-negative range used for quantities.
pub fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
