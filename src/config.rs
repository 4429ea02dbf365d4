//! Runtime configuration read from `data-*` attributes on `<body>`.
//!
//! Every field has a default matching the storefront's stock templates, so a
//! page that sets no attributes gets the standard endpoints and timings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CART_PANEL_URL: &str = "/carrito/panel";
pub const DEFAULT_CART_QTY_URL: &str = "/carrito/qty";
pub const DEFAULT_CART_CLEAR_URL: &str = "/carrito/clear";
pub const DEFAULT_LOGIN_PARTIAL_URL: &str = "/auth/login?partial=1";
pub const DEFAULT_TOAST_TIMEOUT_MS: i64 = 2600;
pub const DEFAULT_BADGE_PULSE_MS: u32 = 150;
pub const DEFAULT_SCROLL_GAP_PX: f64 = 8.0;
pub const DEFAULT_CAROUSEL_STEP_RATIO: f64 = 0.6;

/// Server endpoints the UI talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub cart_panel: String,
    pub cart_qty: String,
    pub cart_clear: String,
    pub login_partial: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            cart_panel: DEFAULT_CART_PANEL_URL.to_owned(),
            cart_qty: DEFAULT_CART_QTY_URL.to_owned(),
            cart_clear: DEFAULT_CART_CLEAR_URL.to_owned(),
            login_partial: DEFAULT_LOGIN_PARTIAL_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub endpoints: Endpoints,
    /// `<= 0` makes toasts persistent.
    pub toast_timeout_ms: i64,
    pub badge_pulse_ms: u32,
    pub scroll_gap_px: f64,
    pub carousel_step_ratio: f64,
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            badge_pulse_ms: DEFAULT_BADGE_PULSE_MS,
            scroll_gap_px: DEFAULT_SCROLL_GAP_PX,
            carousel_step_ratio: DEFAULT_CAROUSEL_STEP_RATIO,
            log_level: log::Level::Info,
        }
    }
}

impl UiConfig {
    /// Build config from an attribute lookup (`data-cart-panel-url`, ...).
    ///
    /// Recognized attributes:
    /// - `data-cart-panel-url`, `data-cart-qty-url`, `data-cart-clear-url`,
    ///   `data-login-url`: endpoint overrides, ignored when blank
    /// - `data-toast-timeout-ms`: integer, default 2600
    /// - `data-log-level`: `error`..`trace`, default `info`
    ///
    /// Unparsable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        let url = |name: &str, current: &mut String| {
            if let Some(v) = lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
                *current = v;
            }
        };
        url("data-cart-panel-url", &mut cfg.endpoints.cart_panel);
        url("data-cart-qty-url", &mut cfg.endpoints.cart_qty);
        url("data-cart-clear-url", &mut cfg.endpoints.cart_clear);
        url("data-login-url", &mut cfg.endpoints.login_partial);

        if let Some(ms) = lookup("data-toast-timeout-ms").and_then(|v| v.trim().parse::<i64>().ok()) {
            cfg.toast_timeout_ms = ms;
        }
        if let Some(level) = lookup("data-log-level").and_then(|v| v.trim().parse::<log::Level>().ok()) {
            cfg.log_level = level;
        }

        cfg
    }
}
