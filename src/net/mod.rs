//! Network types and helpers.
//!
//! `types` and `qty` are plain Rust. `http` performs real requests through
//! `gloo-net` and only exists with the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod http;
pub mod qty;
pub mod types;
