//! Smooth scrolling for hash links and the product carousel.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::refs::NAVBAR_ID;
use crate::dom::{closest, query};
use crate::util::scroll::{carousel_step, hash_target, offset_top};

const CAROUSEL_WRAP_SELECTOR: &str = ".carousel-wrap";
const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";

/// Scroll so the element named by `hash` sits just below the navbar.
pub fn scroll_to_hash(window: &Window, document: &Document, hash: &str, gap: f64) {
    let Some(target) = hash_target(hash).and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    let navbar_height = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0, |el| el.offset_height());
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = offset_top(target.get_bounding_client_rect().top(), scroll_y, f64::from(navbar_height), gap);

    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Scroll the carousel track enclosing `control` by one step.
pub fn scroll_carousel(control: &Element, dir: i32, ratio: f64) {
    let Some(track) = closest(control, CAROUSEL_WRAP_SELECTOR).and_then(|wrap| query(&wrap, CAROUSEL_TRACK_SELECTOR))
    else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_left(carousel_step(track.client_width(), dir, ratio));
    opts.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&opts);
}
