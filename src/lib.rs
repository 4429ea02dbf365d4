//! # storefront-ui
//!
//! WASM interactivity layer for the server-rendered storefront: side menu,
//! cart panel kept in sync with the server, login modal loaded from a
//! partial, toast notifications, and the product carousel.
//!
//! The crate is split the same way as the rest of the client code:
//! `state`, `action`, `config`, `flow`, and `net` are plain Rust and are
//! tested natively, while `dom` holds the browser wiring and only compiles
//! with the `hydrate` feature.

pub mod action;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod flow;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs logging, the panic hook, and every listener.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = dom::read_config();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    match dom::install(config) {
        Ok(()) => log::info!("storefront ui installed"),
        Err(e) => log::error!("storefront ui install failed: {e}"),
    }
}
