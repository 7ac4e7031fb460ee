//! # login-modal
//!
//! Leptos + WASM login dialog for the application shell.
//!
//! The dialog collects credentials, submits them through an injected
//! authentication service and, on success, announces the login, follows any
//! redirect that was stored before authentication was required and closes
//! itself. Browser-backed collaborators live behind the `hydrate` feature;
//! the view-model in `state::login` is plain Rust and runs under `cargo test`.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs panic reporting and console logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
