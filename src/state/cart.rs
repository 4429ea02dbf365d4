//! Cart badge, cart panel snapshot, and the mutations the cart panel issues.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::state::toast::{Toast, ToastKind};

pub const CART_LIST_ID: &str = "cart-list";
pub const BADGE_HIDDEN_CLASS: &str = "hidden";
pub const BADGE_PULSE_CLASS: &str = "scale-110";
pub const BADGE_TRANSITION: &str = "transform .15s ease, opacity .15s ease";

/// How the cart-count badge should look for a quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeView {
    pub text: String,
    pub hidden: bool,
    /// Run the short scale animation.
    pub pulse: bool,
}

impl BadgeView {
    pub fn for_qty(qty: u32) -> Self {
        Self { text: qty.to_string(), hidden: qty == 0, pulse: qty > 0 }
    }
}

/// Cart panel state captured before its node is replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartPanelSnapshot {
    pub was_open: bool,
    pub list_scroll_top: i32,
}

impl CartPanelSnapshot {
    /// Scroll offset to apply to the new list, only when the panel was open.
    pub fn scroll_to_restore(&self) -> Option<i32> {
        self.was_open.then_some(self.list_scroll_top)
    }
}

/// A server-side change to the cart made from the cart panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartMutation {
    Clear,
    Quantity,
    Remove,
}

impl CartMutation {
    /// Whether the request carries the form's fields.
    pub fn sends_form_data(self) -> bool {
        matches!(self, CartMutation::Quantity)
    }

    /// Toast shown once the mutation and refresh succeed.
    pub fn toast(self) -> Toast {
        match self {
            CartMutation::Clear => Toast::new(ToastKind::Info, "Cart", "Your cart was emptied."),
            CartMutation::Quantity => Toast::new(ToastKind::Success, "Quantity updated", ""),
            CartMutation::Remove => Toast::new(ToastKind::Info, "Item removed", ""),
        }
    }
}

/// Pick the product name for the add-to-cart toast.
///
/// Prefers the form's `data-product-name`, then the product card heading.
pub fn resolve_product_name(data_attr: Option<&str>, card_heading: Option<&str>) -> String {
    [data_attr, card_heading]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_owned()
}

/// The form action to post to, falling back when the attribute is missing.
pub fn resolve_form_action(attr: Option<&str>, fallback: &str) -> String {
    attr.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(fallback).to_owned()
}
