use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::types::Method;
use crate::state::cart::{BadgeView, CartPanelSnapshot};
use crate::state::toast::ToastKind;
use crate::state::ui::UiState;

/// In-memory page + server used to drive the flows.
#[derive(Default)]
struct FakePort {
    ui: RefCell<UiState>,
    badge: RefCell<Option<BadgeView>>,
    server_qty: Cell<u32>,
    qty_after_send: Cell<Option<u32>>,
    fail_send: Cell<bool>,
    fail_panel: Cell<bool>,
    panel_version: Cell<u32>,
    list_scroll_top: Cell<i32>,
    sent: RefCell<Vec<RequestSpec>>,
    toasts: RefCell<Vec<Toast>>,
    login_loaded: Cell<bool>,
}

impl FakePort {
    fn with_qty(qty: u32) -> Self {
        let port = Self::default();
        port.server_qty.set(qty);
        port
    }

    fn network_failure(&self, url: &str) -> NetworkError {
        self.toasts.borrow_mut().push(Toast::network_error());
        NetworkError::Status { url: url.to_owned(), status: 503, status_text: "Service Unavailable".to_owned() }
    }

    fn is_open(&self, panel: Panel) -> bool {
        self.ui.borrow().panels.is_open(panel)
    }

    fn last_toast(&self) -> Option<Toast> {
        self.toasts.borrow().last().cloned()
    }
}

impl StorefrontPort for FakePort {
    async fn send(&self, request: RequestSpec) -> Result<(), NetworkError> {
        if self.fail_send.get() {
            return Err(self.network_failure(&request.url));
        }
        if let Some(qty) = self.qty_after_send.get() {
            self.server_qty.set(qty);
        }
        self.sent.borrow_mut().push(request);
        Ok(())
    }

    async fn refresh_panel(&self) -> Result<(), NetworkError> {
        if self.fail_panel.get() {
            return Err(self.network_failure("/carrito/panel"));
        }
        let snapshot =
            CartPanelSnapshot { was_open: self.is_open(Panel::Cart), list_scroll_top: self.list_scroll_top.get() };
        self.panel_version.set(self.panel_version.get() + 1);
        self.list_scroll_top.set(snapshot.scroll_to_restore().unwrap_or(0));
        Ok(())
    }

    async fn refresh_badge(&self) -> u32 {
        let qty = self.server_qty.get();
        let view = self.ui.borrow_mut().record_qty(qty);
        *self.badge.borrow_mut() = Some(view);
        qty
    }

    async fn load_login(&self) -> Result<(), NetworkError> {
        self.login_loaded.set(true);
        Ok(())
    }

    fn open_panel(&self, panel: Panel) {
        self.ui.borrow_mut().panels.open(panel);
    }

    fn close_panel(&self, panel: Panel) {
        self.ui.borrow_mut().panels.close(panel);
    }

    fn toast(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

// =============================================================
// open_cart / open_login
// =============================================================

#[test]
fn open_cart_refreshes_then_opens() {
    let port = FakePort::with_qty(1);
    block_on(open_cart(&port)).unwrap();
    assert_eq!(port.panel_version.get(), 1);
    assert!(port.is_open(Panel::Cart));
}

#[test]
fn open_cart_stays_closed_when_refresh_fails() {
    let port = FakePort::with_qty(1);
    port.fail_panel.set(true);
    assert!(block_on(open_cart(&port)).is_err());
    assert!(!port.is_open(Panel::Cart));
    assert_eq!(port.last_toast().map(|t| t.kind), Some(ToastKind::Error));
}

#[test]
fn open_login_loads_partial_and_replaces_side_menu() {
    let port = FakePort::default();
    port.open_panel(Panel::SideMenu);
    block_on(open_login(&port)).unwrap();
    assert!(port.login_loaded.get());
    assert!(port.is_open(Panel::Login));
    assert!(!port.is_open(Panel::SideMenu));
}

// =============================================================
// mutate_cart
// =============================================================

#[test]
fn decrement_to_zero_hides_badge_and_closes_cart() {
    let port = FakePort::with_qty(2);
    port.open_panel(Panel::Cart);
    port.qty_after_send.set(Some(0));

    let request = RequestSpec::post("/carrito/qty/7").with_form(vec![("delta".to_owned(), "-2".to_owned())]);
    let qty = block_on(mutate_cart(&port, CartMutation::Quantity, request)).unwrap();

    assert_eq!(qty, 0);
    let badge = port.badge.borrow().clone().unwrap();
    assert!(badge.hidden);
    assert!(!port.is_open(Panel::Cart));
    assert!(port.ui.borrow().panels.view(Panel::Cart).aria_hidden);
    assert_eq!(port.last_toast().map(|t| t.title), Some("Quantity updated".to_owned()));
}

#[test]
fn decrement_keeping_items_leaves_cart_open_with_scroll() {
    let port = FakePort::with_qty(3);
    port.open_panel(Panel::Cart);
    port.list_scroll_top.set(180);
    port.qty_after_send.set(Some(2));

    let qty = block_on(mutate_cart(&port, CartMutation::Quantity, RequestSpec::post("/carrito/qty/7"))).unwrap();

    assert_eq!(qty, 2);
    assert!(port.is_open(Panel::Cart));
    assert_eq!(port.list_scroll_top.get(), 180);
    assert_eq!(port.badge.borrow().as_ref().map(|b| b.text.clone()), Some("2".to_owned()));
}

#[test]
fn remove_sends_request_and_toasts() {
    let port = FakePort::with_qty(1);
    port.open_panel(Panel::Cart);
    block_on(mutate_cart(&port, CartMutation::Remove, RequestSpec::post("/carrito/remove/3"))).unwrap();

    let sent = port.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/carrito/remove/3");
    assert_eq!(port.last_toast().map(|t| t.title), Some("Item removed".to_owned()));
    assert!(port.is_open(Panel::Cart));
}

#[test]
fn clear_cart_network_failure_keeps_prior_state() {
    let port = FakePort::with_qty(4);
    port.open_panel(Panel::Cart);
    port.refresh_badge_sync();
    port.fail_send.set(true);

    let result = block_on(mutate_cart(&port, CartMutation::Clear, RequestSpec::post("/carrito/clear")));

    assert!(result.is_err());
    assert!(port.is_open(Panel::Cart));
    assert_eq!(port.panel_version.get(), 0);
    assert_eq!(port.ui.borrow().cart_qty, 4);
    let toasts = port.toasts.borrow();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
}

#[test]
fn clear_cart_success_closes_panel() {
    let port = FakePort::with_qty(4);
    port.open_panel(Panel::Cart);
    port.qty_after_send.set(Some(0));

    block_on(mutate_cart(&port, CartMutation::Clear, RequestSpec::post("/carrito/clear"))).unwrap();

    assert!(!port.is_open(Panel::Cart));
    let toast = port.last_toast().unwrap();
    assert_eq!(toast.title, "Cart");
    assert_eq!(toast.message, "Your cart was emptied.");
}

// =============================================================
// add_to_cart
// =============================================================

#[test]
fn add_to_cart_opens_cart_updates_badge_and_toasts() {
    let port = FakePort::with_qty(1);
    port.qty_after_send.set(Some(2));

    let request = RequestSpec::post("/carrito/add/9").with_form(vec![("qty".to_owned(), "1".to_owned())]).from_fetch();
    let qty = block_on(add_to_cart(&port, request, "Red Shoes")).unwrap();

    assert_eq!(qty, 2);
    assert!(port.is_open(Panel::Cart));
    assert!(!port.ui.borrow().panels.view(Panel::Cart).aria_hidden);
    let badge = port.badge.borrow().clone().unwrap();
    assert_eq!(badge.text, "2");
    assert!(!badge.hidden);
    let toast = port.last_toast().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Added to cart");
    assert_eq!(toast.message, "Red Shoes");
    assert_eq!(port.sent.borrow()[0].headers, vec![("X-Requested-With", "fetch".to_owned())]);
}

#[test]
fn add_to_cart_closes_side_menu() {
    let port = FakePort::with_qty(0);
    port.qty_after_send.set(Some(1));
    port.open_panel(Panel::SideMenu);
    block_on(add_to_cart(&port, RequestSpec::post("/carrito/add/1"), "")).unwrap();
    assert!(port.is_open(Panel::Cart));
    assert!(!port.is_open(Panel::SideMenu));
}

#[test]
fn add_to_cart_failure_does_not_open_cart() {
    let port = FakePort::with_qty(0);
    port.fail_send.set(true);
    assert!(block_on(add_to_cart(&port, RequestSpec::post("/carrito/add/1"), "Hat")).is_err());
    assert!(!port.is_open(Panel::Cart));
    assert_eq!(port.last_toast().map(|t| t.kind), Some(ToastKind::Error));
}

impl FakePort {
    fn refresh_badge_sync(&self) {
        block_on(self.refresh_badge());
    }
}
