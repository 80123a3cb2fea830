//! # admin-console
//!
//! Leptos + WASM administrative console for managing uploaded design files
//! (circuit netlists and tech files) and user accounts in a multi-tenant
//! engineering tool. All business logic, validation, and authorization live
//! behind a REST API; this crate renders the grids, modals, and toasts and
//! owns the HTTP glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the browser build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
