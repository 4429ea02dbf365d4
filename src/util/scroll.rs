//! Scroll geometry for hash links and the product carousel.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Return the element id a hash link points at, or `None` for `""`/`"#"`.
pub fn hash_target(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Absolute document offset to scroll to so `target` clears the fixed navbar.
pub fn offset_top(rect_top: f64, scroll_y: f64, navbar_height: f64, gap: f64) -> f64 {
    rect_top + scroll_y - (navbar_height + gap)
}

/// Parse a carousel `data-dir` value; zero or junk means forward.
pub fn carousel_direction(raw: Option<&str>) -> i32 {
    match raw.and_then(crate::util::number::parse_leading_int) {
        Some(0) | None => 1,
        Some(n) => i32::try_from(n.clamp(i64::from(i32::MIN), i64::from(i32::MAX))).unwrap_or(1),
    }
}

/// Horizontal distance to scroll the carousel track for one click.
pub fn carousel_step(client_width: i32, dir: i32, ratio: f64) -> f64 {
    f64::from(dir) * (f64::from(client_width) * ratio).round()
}
