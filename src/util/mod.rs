//! Small parsing and geometry helpers shared by the state and DOM layers.

pub mod number;
pub mod scroll;
