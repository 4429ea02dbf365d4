use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::config::UiConfig;
use crate::dom::refs::DomRefs;
use crate::dom::toast::Toaster;
use crate::dom::{cart, panels};
use crate::flow::StorefrontPort;
use crate::net::http;
use crate::net::qty::parse_qty;
use crate::net::types::{ErrorReport, NetworkError, RequestSpec, TextResponse};
use crate::state::panels::{Panel, PanelTransition};
use crate::state::toast::{FLASH_SELECTOR, Toast};
use crate::state::ui::UiState;

/// Owns the page's element handles and UI state.
///
/// Shared as `Rc<Controller>` by every listener. Borrows of `refs` and
/// `state` are always released before an `.await`.
pub struct Controller {
    config: UiConfig,
    refs: RefCell<DomRefs>,
    state: RefCell<UiState>,
    toaster: Toaster,
}

impl Controller {
    pub fn new(config: UiConfig, refs: DomRefs) -> Self {
        let toaster = Toaster::new(
            refs.window.clone(),
            refs.document.clone(),
            refs.toast_root.clone(),
            config.toast_timeout_ms,
        );
        Self { config, refs: RefCell::new(refs), state: RefCell::new(UiState::default()), toaster }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn window(&self) -> Window {
        self.refs.borrow().window.clone()
    }

    pub fn document(&self) -> Document {
        self.refs.borrow().document.clone()
    }

    pub fn overlay(&self) -> Option<Element> {
        self.refs.borrow().overlay.clone()
    }

    /// Bring every panel's markup in line with the (all closed) state.
    pub fn render_all_panels(&self) {
        let refs = self.refs.borrow();
        let state = self.state.borrow();
        for panel in Panel::ALL {
            if let Some(el) = refs.panel(panel) {
                panels::render_view(el, &state.panels.view(panel));
            }
        }
    }

    /// Replace server-rendered flash elements with toasts.
    ///
    /// Reads `data-kind`, `data-title` and `data-timeout-ms`; the element's
    /// text is the message.
    pub fn show_flashes(&self) {
        let document = self.document();
        let flashes = match document.query_selector_all(FLASH_SELECTOR) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("flash lookup failed: {e:?}");
                return;
            }
        };
        for i in 0..flashes.length() {
            let Some(el) = flashes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let timeout = el.get_attribute("data-timeout-ms");
            let toast = Toast::from_flash(
                &el.get_attribute("data-kind").unwrap_or_default(),
                &el.get_attribute("data-title").unwrap_or_default(),
                &el.text_content().unwrap_or_default(),
                timeout.as_deref(),
            );
            log::debug!("flash -> {:?} toast {}", toast.kind, toast.id);
            self.toaster.show(&toast);
            el.remove();
        }
    }

    /// Overlay click and Escape.
    pub fn close_all(&self) {
        let transition = self.state.borrow_mut().panels.close_all();
        self.render(&transition);
    }

    fn render(&self, transition: &PanelTransition) {
        if transition.is_noop() {
            return;
        }
        panels::render_transition(&self.refs.borrow(), transition);
    }

    async fn get(&self, url: &str, report: ErrorReport) -> Result<TextResponse, NetworkError> {
        http::request(&RequestSpec::get(url), report, &self.toaster).await
    }
}

impl StorefrontPort for Controller {
    async fn send(&self, request: RequestSpec) -> Result<(), NetworkError> {
        http::request(&request, ErrorReport::Toast, &self.toaster).await.map(|_| ())
    }

    async fn refresh_panel(&self) -> Result<(), NetworkError> {
        let fetched = self.get(&self.config.endpoints.cart_panel, ErrorReport::Toast).await?;

        let was_open = self.state.borrow().panels.is_open(Panel::Cart);
        let (document, current) = {
            let refs = self.refs.borrow();
            (refs.document.clone(), refs.cart_panel.clone())
        };
        let Some(current) = current else {
            log::warn!("no #cart-panel on page; skipping refresh");
            return Ok(());
        };

        let snapshot = cart::snapshot(&current, was_open);
        match cart::swap_panel(&document, &current, &fetched.body, snapshot) {
            Ok(Some(fresh)) => self.refs.borrow_mut().cart_panel = Some(fresh),
            Ok(None) => log::warn!("cart partial had no #cart-panel"),
            Err(e) => log::error!("cart panel swap failed: {e}"),
        }
        Ok(())
    }

    async fn refresh_badge(&self) -> u32 {
        // Soft-fail: a badge miss reads as an empty cart, not an error.
        let qty = match self.get(&self.config.endpoints.cart_qty, ErrorReport::Silent).await {
            Ok(resp) => parse_qty(resp.content_type.as_deref(), &resp.body),
            Err(e) => {
                log::debug!("badge refresh failed, treating cart as empty: {e}");
                return 0;
            }
        };

        let view = self.state.borrow_mut().record_qty(qty);
        let badge = self.refs.borrow().cart_count.clone();
        if let Some(badge) = badge {
            cart::render_badge(&badge, &view, self.config.badge_pulse_ms);
        }
        qty
    }

    async fn load_login(&self) -> Result<(), NetworkError> {
        let fetched = self.get(&self.config.endpoints.login_partial, ErrorReport::Toast).await?;
        let body = self.refs.borrow().login_body.clone();
        match body {
            Some(body) => body.set_inner_html(&fetched.body),
            None => log::warn!("no #login-modal-body on page"),
        }
        Ok(())
    }

    fn open_panel(&self, panel: Panel) {
        let transition = self.state.borrow_mut().panels.open(panel);
        self.render(&transition);
    }

    fn close_panel(&self, panel: Panel) {
        let transition = self.state.borrow_mut().panels.close(panel);
        self.render(&transition);
    }

    fn toast(&self, toast: Toast) {
        self.toaster.show(&toast);
    }
}
