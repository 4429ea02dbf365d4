//! Client-side UI state.
//!
//! DESIGN
//! ======
//! State is split by concern (`panels`, `cart`, `toast`) so the DOM layer
//! can render each piece from a small value type. `ui::UiState` ties the
//! pieces together and is the only mutable state the controller owns.

pub mod cart;
pub mod panels;
pub mod toast;
pub mod ui;
