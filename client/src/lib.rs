//! # client
//!
//! Leptos + WASM frontend for the Leadboard CRM dashboards.
//!
//! This crate contains pages, components, application state, the network
//! layer for the external CRM backend, and browser utilities. Role-based
//! route authorization is shared with the host server through the `access`
//! crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
