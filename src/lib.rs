//! # session-view
//!
//! Leptos + WASM single-page client for a cookie-session login flow.
//! Authentication itself (OAuth exchange, session cookies, user lookup) lives
//! in an external backend; this crate detects the post-redirect success
//! marker, fetches the current user, and renders either the login entry
//! point or the signed-in profile with a logout action.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init (e.g. hot reload) reports an error we can ignore.
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
