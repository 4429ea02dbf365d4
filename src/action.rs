//! Typed UI actions resolved from click and submit targets.
//!
//! The DOM layer reads a handful of attributes off the clicked element into
//! a `ClickTarget`; `Action::resolve` turns that into at most one action by
//! testing menu controls, then cart controls, then `data-action`, then the
//! login controls. The first match wins.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::state::cart::CartMutation;
use crate::state::panels::Panel;
use crate::util::scroll::carousel_direction;

/// Selector the click delegator uses to find the actionable element.
pub const CLICKABLE_SELECTOR: &str = "button, a, [data-action]";
/// Selector for in-page anchor links.
pub const HASH_LINK_SELECTOR: &str = "a[href^=\"#\"]";
/// Marker attribute placed on toast elements.
pub const TOAST_MARKER_ATTR: &str = "data-toast-id";

/// Attributes read from the element a click resolved to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget<'a> {
    pub id: &'a str,
    pub action: Option<&'a str>,
    pub target: Option<&'a str>,
    pub dir: Option<&'a str>,
    /// The element sits inside a toast.
    pub in_toast: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Open(Panel),
    Close(Panel),
    /// Refresh the cart panel, then open it.
    OpenCart,
    Mutate(CartMutation),
    ToggleSubmenu { target: String },
    ScrollCarousel { dir: i32 },
    /// Load the login partial, then open the modal.
    OpenLogin,
}

type IdRule = (&'static str, Action);

const MENU_IDS: [IdRule; 2] = [
    ("menu-btn", Action::Open(Panel::SideMenu)),
    ("close-side", Action::Close(Panel::SideMenu)),
];

const CART_IDS: [IdRule; 3] = [
    ("open-cart", Action::OpenCart),
    ("close-cart-panel", Action::Close(Panel::Cart)),
    ("clear-cart", Action::Mutate(CartMutation::Clear)),
];

const LOGIN_IDS: [IdRule; 2] = [("open-login", Action::OpenLogin), ("close-login", Action::Close(Panel::Login))];

impl Action {
    /// Resolve a click target into an action, or `None` when nothing applies.
    pub fn resolve(target: &ClickTarget<'_>) -> Option<Self> {
        if target.in_toast {
            return None;
        }
        Self::by_id(&MENU_IDS, target.id)
            .or_else(|| Self::by_id(&CART_IDS, target.id))
            .or_else(|| Self::by_data_action(target))
            .or_else(|| Self::by_id(&LOGIN_IDS, target.id))
    }

    fn by_id(rules: &[IdRule], id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        rules.iter().find(|(rule_id, _)| *rule_id == id).map(|(_, action)| action.clone())
    }

    fn by_data_action(target: &ClickTarget<'_>) -> Option<Self> {
        match target.action? {
            "qty" => Some(Action::Mutate(CartMutation::Quantity)),
            "remove" => Some(Action::Mutate(CartMutation::Remove)),
            "toggle-submenu" => {
                let id = target.target.map(str::trim).filter(|t| !t.is_empty())?;
                Some(Action::ToggleSubmenu { target: id.to_owned() })
            }
            "scroll" => Some(Action::ScrollCarousel { dir: carousel_direction(target.dir) }),
            _ => None,
        }
    }

    /// Whether the browser's default behavior for the click is suppressed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Action::ScrollCarousel { .. })
    }
}

/// A form intercepted by one of the submit delegators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Cart(CartMutation),
    AddToCart,
}

impl FormKind {
    /// Cart-panel forms in the order the delegator tests them.
    pub const CART_FORMS: [(&'static str, FormKind); 3] = [
        (".cart-qty-form", FormKind::Cart(CartMutation::Quantity)),
        (".cart-remove-form", FormKind::Cart(CartMutation::Remove)),
        ("#clear-cart-form", FormKind::Cart(CartMutation::Clear)),
    ];

    pub const ADD_TO_CART_SELECTOR: &'static str = ".add-to-cart-form";

    /// First cart form whose selector `matches` accepts.
    pub fn classify_cart(matches: impl Fn(&str) -> bool) -> Option<(FormKind, &'static str)> {
        Self::CART_FORMS.iter().find(|(sel, _)| matches(*sel)).map(|(sel, kind)| (*kind, *sel))
    }
}
