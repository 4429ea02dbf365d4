//! Renders panel transitions: classes, `aria-hidden`, overlay, scroll lock,
//! and login focus.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::refs::DomRefs;
use crate::dom::{query, set_class};
use crate::state::panels::{PanelTransition, PanelView};

const OVERLAY_SHOWN_CLASS: &str = "show";
const SCROLL_LOCK_CLASS: &str = "no-scroll";
const FOCUSABLE_SELECTOR: &str = "input, button, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Apply one transition to the page.
pub fn render_transition(refs: &DomRefs, transition: &PanelTransition) {
    for view in transition.views() {
        let Some(el) = refs.panel(view.panel) else {
            continue;
        };
        render_view(el, &view);
        if view.open && view.panel.takes_focus() {
            focus_first(el);
        }
    }

    if let Some(overlay) = &refs.overlay {
        set_class(overlay, OVERLAY_SHOWN_CLASS, transition.overlay_visible);
    }
    lock_scroll(refs, transition.overlay_visible);
}

/// Set a panel element's open class and `aria-hidden` from one view.
pub fn render_view(el: &Element, view: &PanelView) {
    set_class(el, view.class, view.class_present);
    if let Err(e) = el.set_attribute("aria-hidden", view.aria_value()) {
        log::warn!("aria-hidden on #{} failed: {e:?}", view.panel.element_id());
    }
}

fn lock_scroll(refs: &DomRefs, locked: bool) {
    if let Some(html) = &refs.html {
        set_class(html, SCROLL_LOCK_CLASS, locked);
    }
    set_class(&refs.body, SCROLL_LOCK_CLASS, locked);
}

fn focus_first(panel: &Element) {
    let Some(target) = query(panel, FOCUSABLE_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    if let Err(e) = target.focus() {
        log::debug!("focus failed: {e:?}");
    }
}
