use super::*;

const JSON: Option<&str> = Some("application/json; charset=utf-8");
const TEXT: Option<&str> = Some("text/plain; charset=utf-8");

// =============================================================
// JSON responses
// =============================================================

#[test]
fn json_object_qty() {
    assert_eq!(parse_qty(JSON, r#"{"qty": 3}"#), 3);
}

#[test]
fn json_bare_number() {
    assert_eq!(parse_qty(JSON, "4"), 4);
}

#[test]
fn json_object_without_qty_is_zero() {
    assert_eq!(parse_qty(JSON, r#"{"count": 3}"#), 0);
    assert_eq!(parse_qty(JSON, r#"{"qty": null}"#), 0);
}

#[test]
fn json_content_type_is_case_insensitive() {
    assert_eq!(parse_qty(Some("Application/JSON"), r#"{"qty": 2}"#), 2);
}

#[test]
fn json_fractional_truncates() {
    assert_eq!(parse_qty(JSON, r#"{"qty": 2.7}"#), 2);
}

#[test]
fn invalid_json_is_zero() {
    assert_eq!(parse_qty(JSON, "{qty: 3"), 0);
}

// =============================================================
// Text responses
// =============================================================

#[test]
fn plain_text_integer() {
    assert_eq!(parse_qty(TEXT, "5"), 5);
    assert_eq!(parse_qty(None, " 12\n"), 12);
}

#[test]
fn text_falls_back_to_json_object() {
    assert_eq!(parse_qty(Some("text/html"), r#"{"qty": 6}"#), 6);
}

#[test]
fn unparsable_text_is_zero() {
    assert_eq!(parse_qty(TEXT, "many"), 0);
    assert_eq!(parse_qty(TEXT, ""), 0);
    assert_eq!(parse_qty(TEXT, "[1,2]"), 0);
}

// =============================================================
// Non-negative invariant
// =============================================================

#[test]
fn negative_quantities_clamp_to_zero() {
    assert_eq!(parse_qty(TEXT, "-2"), 0);
    assert_eq!(parse_qty(JSON, "-2"), 0);
    assert_eq!(parse_qty(JSON, r#"{"qty": -7.5}"#), 0);
    assert_eq!(parse_qty(JSON, r#"{"qty": "-1"}"#), 0);
}

#[test]
fn assorted_bodies_resolve_to_expected_counts() {
    let cases: [(&str, u32, u32); 9] = [
        ("", 0, 0),
        ("0", 0, 0),
        ("-0", 0, 0),
        ("1e3", 1000, 1),
        ("NaN", 0, 0),
        ("null", 0, 0),
        ("true", 0, 0),
        (r#"{"qty":"9"}"#, 9, 9),
        ("18446744073709551615", u32::MAX, u32::MAX),
    ];
    for (body, as_json, as_text) in cases {
        assert_eq!(parse_qty(JSON, body), as_json, "json {body:?}");
        assert_eq!(parse_qty(TEXT, body), as_text, "text {body:?}");
    }
}
