//! Cart panel swapping and badge rendering.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::panels::render_view;
use crate::dom::{DomError, query, set_class};
use crate::state::cart::{
    BADGE_HIDDEN_CLASS, BADGE_PULSE_CLASS, BADGE_TRANSITION, BadgeView, CART_LIST_ID, CartPanelSnapshot,
};
use crate::state::panels::{Panel, PanelView};

/// Capture the open state and list scroll of the current panel.
pub fn snapshot(panel: &Element, was_open: bool) -> CartPanelSnapshot {
    let list_scroll_top = query(panel, &format!("#{CART_LIST_ID}")).map_or(0, |list| list.scroll_top());
    CartPanelSnapshot { was_open, list_scroll_top }
}

/// Replace `current` with the `#cart-panel` found in `html`.
///
/// Returns the new panel node, or `None` when the fragment has no panel
/// (the page is left untouched in that case).
///
/// # Errors
///
/// Fails when the DOM rejects the replacement.
pub fn swap_panel(
    document: &Document,
    current: &Element,
    html: &str,
    snapshot: CartPanelSnapshot,
) -> Result<Option<Element>, DomError> {
    let scratch = document.create_element("div")?;
    scratch.set_inner_html(html);
    let Some(fresh) = query(&scratch, &format!("#{}", Panel::Cart.element_id())) else {
        return Ok(None);
    };

    current.replace_with_with_node_1(&fresh)?;
    render_view(&fresh, &PanelView::new(Panel::Cart, snapshot.was_open));
    if let Some(top) = snapshot.scroll_to_restore() {
        if let Some(list) = query(&fresh, &format!("#{CART_LIST_ID}")) {
            list.set_scroll_top(top);
        }
    }
    Ok(Some(fresh))
}

/// Write the badge text and visibility, pulsing it when non-empty.
pub fn render_badge(badge: &HtmlElement, view: &BadgeView, pulse_ms: u32) {
    badge.set_text_content(Some(&view.text));
    set_class(badge, BADGE_HIDDEN_CLASS, view.hidden);
    if view.pulse {
        set_class(badge, BADGE_PULSE_CLASS, true);
        let badge = badge.clone();
        Timeout::new(pulse_ms, move || set_class(&badge, BADGE_PULSE_CLASS, false)).forget();
    }
}

pub fn install_badge_transition(badge: &HtmlElement) {
    if let Err(e) = badge.style().set_property("transition", BADGE_TRANSITION) {
        log::debug!("badge transition not set: {e:?}");
    }
}
