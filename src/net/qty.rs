//! Parsing of the `/carrito/qty` response.
//!
//! The endpoint answers either JSON (a bare number or `{"qty": n}`) or a
//! plain-text integer. Anything unreadable counts as an empty cart.

#[cfg(test)]
#[path = "qty_test.rs"]
mod qty_test;

use serde_json::Value;

use crate::util::number::{clamp_count, parse_leading_int};

/// Resolve the cart quantity from a response body. Never fails.
pub fn parse_qty(content_type: Option<&str>, body: &str) -> u32 {
    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if is_json {
        return match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => map.get("qty").map_or(0, count_from_value),
            Ok(value) => count_from_value(&value),
            Err(e) => {
                log::debug!("qty: unreadable json body: {e}");
                0
            }
        };
    }

    if let Some(n) = parse_leading_int(body) {
        return clamp_count(n);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map.get("qty").map_or(0, count_from_value),
        _ => 0,
    }
}

fn count_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                clamp_count(i)
            } else if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else {
                n.as_f64().map_or(0, float_count)
            }
        }
        Value::String(s) => parse_leading_int(s).map_or(0, clamp_count),
        _ => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_count(f: f64) -> u32 {
    if f.is_finite() && f > 0.0 { f.trunc().min(f64::from(u32::MAX)) as u32 } else { 0 }
}
