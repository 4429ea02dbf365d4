//! Delegated listeners.
//!
//! Clicks and submits are caught once at the body/document level and turned
//! into typed actions; nothing is attached to the cart panel itself, so
//! swapping the panel node never leaves stale handlers behind.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlFormElement, KeyboardEvent};

use crate::action::{Action, CLICKABLE_SELECTOR, ClickTarget, FormKind, HASH_LINK_SELECTOR, TOAST_MARKER_ATTR};
use crate::dom::refs::CLEAR_CART_FORM_ID;
use crate::dom::{Controller, DomError, closest, event_element, query, scroll, set_class};
use crate::flow::{self, StorefrontPort};
use crate::net::types::{FormFields, NetworkError, RequestSpec};
use crate::state::cart::{CartMutation, resolve_form_action, resolve_product_name};
use crate::state::panels::Panel;
use crate::util::scroll::hash_target;

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"], .btn";
const PRODUCT_CARD_SELECTOR: &str = ".product-card";
const SUBMENU_HIDDEN_CLASS: &str = "hidden";

/// Register every listener the page needs.
///
/// # Errors
///
/// Fails when a listener cannot be attached.
pub fn install(ctrl: &Rc<Controller>) -> Result<(), DomError> {
    let document = ctrl.document();
    let window = ctrl.window();
    let body = document.body().ok_or(DomError::NoBody)?;

    let c = Rc::clone(ctrl);
    listen(&body, "click", move |ev| on_hash_link(&c, &ev))?;

    let c = Rc::clone(ctrl);
    listen(&body, "click", move |ev| on_action_click(&c, &ev))?;

    let c = Rc::clone(ctrl);
    listen(&document, "submit", move |ev| on_cart_form_submit(&c, &ev))?;

    let c = Rc::clone(ctrl);
    listen(&document, "submit", move |ev| on_add_to_cart_submit(&c, &ev))?;

    if let Some(overlay) = ctrl.overlay() {
        let c = Rc::clone(ctrl);
        listen(&overlay, "click", move |_| c.close_all())?;
    }

    let c = Rc::clone(ctrl);
    listen(&window, "keydown", move |ev| {
        if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
            c.close_all();
        }
    })?;

    let hash = window.location().hash().unwrap_or_default();
    if hash_target(&hash).is_some() {
        let c = Rc::clone(ctrl);
        Timeout::new(0, move || scroll::scroll_to_hash(&c.window(), &c.document(), &hash, c.config().scroll_gap_px))
            .forget();
    }

    Ok(())
}

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn report<T>(what: &str, result: Result<T, NetworkError>) {
    if let Err(e) = result {
        log::debug!("{what} stopped: {e}");
    }
}

// =============================================================
// Clicks
// =============================================================

fn on_hash_link(ctrl: &Rc<Controller>, ev: &Event) {
    let Some(anchor) = event_element(ev).and_then(|el| closest(&el, HASH_LINK_SELECTOR)) else {
        return;
    };
    let Some(href) = anchor.get_attribute("href").filter(|h| h.starts_with('#')) else {
        return;
    };
    ev.prevent_default();
    ctrl.close_panel(Panel::SideMenu);
    scroll::scroll_to_hash(&ctrl.window(), &ctrl.document(), &href, ctrl.config().scroll_gap_px);
}

fn on_action_click(ctrl: &Rc<Controller>, ev: &Event) {
    let Some(el) = event_element(ev).and_then(|el| closest(&el, CLICKABLE_SELECTOR)) else {
        return;
    };

    let id = el.id();
    let data_action = el.get_attribute("data-action");
    let data_target = el.get_attribute("data-target");
    let data_dir = el.get_attribute("data-dir");
    let target = ClickTarget {
        id: &id,
        action: data_action.as_deref(),
        target: data_target.as_deref(),
        dir: data_dir.as_deref(),
        in_toast: closest(&el, &format!("[{TOAST_MARKER_ATTR}]")).is_some(),
    };

    let Some(action) = Action::resolve(&target) else {
        return;
    };
    if action.prevents_default() {
        ev.prevent_default();
    }
    log::debug!("click -> {action:?}");
    run_action(ctrl, &el, action);
}

fn run_action(ctrl: &Rc<Controller>, el: &Element, action: Action) {
    match action {
        Action::Open(panel) => ctrl.open_panel(panel),
        Action::Close(panel) => ctrl.close_panel(panel),
        Action::OpenCart => {
            let c = Rc::clone(ctrl);
            spawn_local(async move { report("open cart", flow::open_cart(&*c).await) });
        }
        Action::OpenLogin => {
            let c = Rc::clone(ctrl);
            spawn_local(async move { report("open login", flow::open_login(&*c).await) });
        }
        Action::Mutate(mutation) => {
            let form = match mutation {
                CartMutation::Clear => ctrl.document().get_element_by_id(CLEAR_CART_FORM_ID),
                CartMutation::Quantity | CartMutation::Remove => closest(el, "form"),
            };
            let Some(form) = form.and_then(|f| f.dyn_into::<HtmlFormElement>().ok()) else {
                log::debug!("{mutation:?} control outside its form");
                return;
            };
            spawn_mutation(ctrl, &form, mutation);
        }
        Action::ToggleSubmenu { target } => {
            if let Some(submenu) = ctrl.document().get_element_by_id(&target) {
                let hidden = submenu.class_list().contains(SUBMENU_HIDDEN_CLASS);
                set_class(&submenu, SUBMENU_HIDDEN_CLASS, !hidden);
            }
        }
        Action::ScrollCarousel { dir } => scroll::scroll_carousel(el, dir, ctrl.config().carousel_step_ratio),
    }
}

// =============================================================
// Submits
// =============================================================

fn on_cart_form_submit(ctrl: &Rc<Controller>, ev: &Event) {
    let Some(origin) = event_element(ev) else {
        return;
    };
    let Some((FormKind::Cart(mutation), selector)) = FormKind::classify_cart(|sel| closest(&origin, sel).is_some())
    else {
        return;
    };
    let Some(form) = closest(&origin, selector).and_then(|f| f.dyn_into::<HtmlFormElement>().ok()) else {
        return;
    };
    ev.prevent_default();
    spawn_mutation(ctrl, &form, mutation);
}

fn on_add_to_cart_submit(ctrl: &Rc<Controller>, ev: &Event) {
    let Some(form) = event_element(ev)
        .and_then(|el| closest(&el, FormKind::ADD_TO_CART_SELECTOR))
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    ev.prevent_default();

    let product = product_name(&form);
    let request = RequestSpec::post(resolve_form_action(form.get_attribute("action").as_deref(), &form.action()))
        .with_form(collect_fields(&form))
        .from_fetch();
    let guard = SubmitGuard::engage(&form);

    let c = Rc::clone(ctrl);
    spawn_local(async move {
        let _guard = guard;
        report("add to cart", flow::add_to_cart(&*c, request, &product).await);
    });
}

fn spawn_mutation(ctrl: &Rc<Controller>, form: &HtmlFormElement, mutation: CartMutation) {
    let fallback = match mutation {
        CartMutation::Clear => ctrl.config().endpoints.cart_clear.clone(),
        CartMutation::Quantity | CartMutation::Remove => form.action(),
    };
    let mut request = RequestSpec::post(resolve_form_action(form.get_attribute("action").as_deref(), &fallback));
    if mutation.sends_form_data() {
        request = request.with_form(collect_fields(form));
    }

    let c = Rc::clone(ctrl);
    spawn_local(async move { report("cart update", flow::mutate_cart(&*c, mutation, request).await) });
}

// =============================================================
// Form helpers
// =============================================================

/// String entries of the form's data set; file inputs are skipped.
fn collect_fields(form: &HtmlFormElement) -> FormFields {
    let data = match web_sys::FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("form data unavailable: {e:?}");
            return Vec::new();
        }
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn product_name(form: &HtmlFormElement) -> String {
    let data_attr = form.get_attribute("data-product-name");
    let heading = closest(form, PRODUCT_CARD_SELECTOR)
        .and_then(|card| query(&card, "h3"))
        .and_then(|h| h.text_content());
    resolve_product_name(data_attr.as_deref(), heading.as_deref())
}

/// Disables a form's submit button until dropped.
struct SubmitGuard {
    button: Option<HtmlElement>,
    was_disabled: bool,
}

impl SubmitGuard {
    fn engage(form: &HtmlFormElement) -> Self {
        let button = query(form, SUBMIT_BUTTON_SELECTOR).and_then(|b| b.dyn_into::<HtmlElement>().ok());
        let was_disabled = button.as_ref().is_some_and(|b| b.has_attribute("disabled"));
        if let Some(b) = &button {
            if let Err(e) = b.set_attribute("disabled", "") {
                log::debug!("could not disable submit: {e:?}");
            }
            if let Err(e) = b.style().set_property("opacity", "0.7") {
                log::debug!("could not dim submit: {e:?}");
            }
        }
        Self { button, was_disabled }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        let Some(b) = &self.button else {
            return;
        };
        if !self.was_disabled {
            if let Err(e) = b.remove_attribute("disabled") {
                log::debug!("could not re-enable submit: {e:?}");
            }
        }
        if let Err(e) = b.style().remove_property("opacity") {
            log::debug!("could not restore submit opacity: {e:?}");
        }
    }
}
