use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = UiConfig::from_lookup(lookup(&[]));
    assert_eq!(cfg, UiConfig::default());
    assert_eq!(cfg.endpoints.cart_panel, DEFAULT_CART_PANEL_URL);
    assert_eq!(cfg.endpoints.cart_qty, DEFAULT_CART_QTY_URL);
    assert_eq!(cfg.endpoints.cart_clear, DEFAULT_CART_CLEAR_URL);
    assert_eq!(cfg.endpoints.login_partial, DEFAULT_LOGIN_PARTIAL_URL);
    assert_eq!(cfg.toast_timeout_ms, 2600);
    assert_eq!(cfg.badge_pulse_ms, 150);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_lookup_overrides_endpoints() {
    let cfg = UiConfig::from_lookup(lookup(&[
        ("data-cart-panel-url", "/shop/cart/panel"),
        ("data-cart-qty-url", " /shop/cart/qty "),
        ("data-login-url", "/login?partial=1"),
    ]));
    assert_eq!(cfg.endpoints.cart_panel, "/shop/cart/panel");
    assert_eq!(cfg.endpoints.cart_qty, "/shop/cart/qty");
    assert_eq!(cfg.endpoints.cart_clear, DEFAULT_CART_CLEAR_URL);
    assert_eq!(cfg.endpoints.login_partial, "/login?partial=1");
}

#[test]
fn from_lookup_ignores_blank_urls() {
    let cfg = UiConfig::from_lookup(lookup(&[("data-cart-clear-url", "   ")]));
    assert_eq!(cfg.endpoints.cart_clear, DEFAULT_CART_CLEAR_URL);
}

#[test]
fn from_lookup_parses_timeout_and_level() {
    let cfg = UiConfig::from_lookup(lookup(&[("data-toast-timeout-ms", "0"), ("data-log-level", "debug")]));
    assert_eq!(cfg.toast_timeout_ms, 0);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_lookup_invalid_numbers_fall_back() {
    let cfg = UiConfig::from_lookup(lookup(&[("data-toast-timeout-ms", "soon"), ("data-log-level", "loud")]));
    assert_eq!(cfg.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
    assert_eq!(cfg.log_level, log::Level::Info);
}
