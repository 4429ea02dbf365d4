//! Browser wiring. Compiled only with the `hydrate` feature.
//!
//! `install` collects the page's elements into `DomRefs`, hands them to a
//! single `Controller`, and registers the delegated listeners. All mutable
//! UI state lives in that controller; nothing is kept in statics.

pub mod cart;
mod controller;
pub mod dispatch;
pub mod panels;
pub mod refs;
pub mod scroll;
pub mod toast;

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::UiConfig;
pub use controller::Controller;
use refs::DomRefs;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

/// Read `UiConfig` from the `data-*` attributes on `<body>`.
pub fn read_config() -> UiConfig {
    match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => UiConfig::from_lookup(|name| body.get_attribute(name)),
        None => UiConfig::default(),
    }
}

/// Wire the page up.
///
/// # Errors
///
/// Fails when the window, document, or body is missing, or a listener
/// cannot be registered.
pub fn install(config: UiConfig) -> Result<(), DomError> {
    let refs = DomRefs::collect()?;
    if let Some(badge) = &refs.cart_count {
        cart::install_badge_transition(badge);
    }

    let ctrl = Rc::new(Controller::new(config, refs));
    ctrl.render_all_panels();
    ctrl.show_flashes();
    dispatch::install(&ctrl)
}

/// Add or remove `class`, logging instead of failing.
pub(crate) fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::warn!("class toggle {class} failed: {e:?}");
    }
}

/// The element an event was dispatched to, if it is one.
pub(crate) fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

/// `closest(selector)`, treating a selector error as no match.
pub(crate) fn closest(el: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    el.closest(selector).unwrap_or_else(|e| {
        log::warn!("bad selector {selector}: {e:?}");
        None
    })
}

/// `query_selector(selector)`, treating a selector error as no match.
pub(crate) fn query(el: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    el.query_selector(selector).unwrap_or_else(|e| {
        log::warn!("bad selector {selector}: {e:?}");
        None
    })
}
