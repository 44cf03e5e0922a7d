//! # whoknows-client
//!
//! Leptos + WASM single-page client for the WhoKnows search API.
//!
//! This crate contains the pages (search, weather, register, log in, change
//! password), shared components, the consent and session-token stores, the
//! authenticated request client and the session controller that ties them
//! together. Everything outside the `csr` feature builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
