//! # lsc-portal
//!
//! Leptos + WASM client for the LSC administrative portal.
//!
//! The `session` module is the core: the persisted login record, token
//! expiry inspection, role derivation, and route-guard decisions. Pages and
//! components apply those decisions; `net` talks to the backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;

/// Browser entry point: install logging, purge an expired session, then
/// mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::PortalConfig::default();
    let validation = session::SessionStore::browser().validate_auth(&session::SystemClock, &config.routes);
    log::debug!("session on load: valid={}", validation.valid);

    leptos::mount::mount_to_body(app::App);
}
