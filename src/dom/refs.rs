use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::DomError;
use crate::state::panels::Panel;

pub const OVERLAY_ID: &str = "overlay";
pub const CART_COUNT_ID: &str = "cart-count";
pub const LOGIN_BODY_ID: &str = "login-modal-body";
pub const TOAST_ROOT_ID: &str = "toast-root";
pub const NAVBAR_ID: &str = "navbar";
pub const CLEAR_CART_FORM_ID: &str = "clear-cart-form";

/// Handles to the elements the UI drives.
///
/// Everything except window, document, and body is optional: a page
/// without a cart simply has no cart behavior. `cart_panel` is replaced
/// each time the panel is refreshed.
pub struct DomRefs {
    pub window: Window,
    pub document: Document,
    pub html: Option<Element>,
    pub body: HtmlElement,
    pub overlay: Option<Element>,
    pub side_menu: Option<Element>,
    pub cart_panel: Option<Element>,
    pub cart_count: Option<HtmlElement>,
    pub login_modal: Option<Element>,
    pub login_body: Option<Element>,
    pub toast_root: Option<Element>,
}

impl DomRefs {
    /// Look the elements up by id.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window, document, or body.
    pub fn collect() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;
        let by_id = |id: &str| document.get_element_by_id(id);

        Ok(Self {
            html: document.document_element(),
            overlay: by_id(OVERLAY_ID),
            side_menu: by_id(Panel::SideMenu.element_id()),
            cart_panel: by_id(Panel::Cart.element_id()),
            cart_count: by_id(CART_COUNT_ID).and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            login_modal: by_id(Panel::Login.element_id()),
            login_body: by_id(LOGIN_BODY_ID),
            toast_root: by_id(TOAST_ROOT_ID),
            body,
            document,
            window,
        })
    }

    pub fn panel(&self, panel: Panel) -> Option<&Element> {
        match panel {
            Panel::SideMenu => self.side_menu.as_ref(),
            Panel::Cart => self.cart_panel.as_ref(),
            Panel::Login => self.login_modal.as_ref(),
        }
    }
}
