use super::*;
use crate::state::panels::Panel;

#[test]
fn ui_state_default_nothing_open_and_empty_cart() {
    let state = UiState::default();
    assert!(Panel::ALL.iter().all(|p| !state.panels.is_open(*p)));
    assert_eq!(state.cart_qty, 0);
}

#[test]
fn record_qty_updates_mirror_and_badge() {
    let mut state = UiState::default();
    let view = state.record_qty(3);
    assert_eq!(state.cart_qty, 3);
    assert_eq!(view.text, "3");

    let view = state.record_qty(0);
    assert_eq!(state.cart_qty, 0);
    assert!(view.hidden);
}

#[test]
fn record_qty_leaves_panels_alone() {
    let mut state = UiState::default();
    state.panels.open(Panel::Cart);
    state.record_qty(0);
    assert!(state.panels.is_open(Panel::Cart));
}
