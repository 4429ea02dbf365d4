#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::cart::BadgeView;
use crate::state::panels::PanelState;

/// Mutable UI state owned by the controller.
///
/// The server owns the cart; `cart_qty` only mirrors the last count fetched
/// so the badge can be re-rendered without another request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub panels: PanelState,
    pub cart_qty: u32,
}

impl UiState {
    /// Record a freshly fetched quantity and return the badge to render.
    pub fn record_qty(&mut self, qty: u32) -> BadgeView {
        self.cart_qty = qty;
        BadgeView::for_qty(qty)
    }
}
