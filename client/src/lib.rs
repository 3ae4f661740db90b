//! # client
//!
//! Leptos UI for the Today dashboard. Rendered on the host with the `ssr`
//! feature and hydrated in the browser with the `hydrate` feature.
//!
//! The browser talks to the hosted backend directly: the host only hands out
//! the public connection settings at `/api/config`. All ordering, validation,
//! and gesture math comes from the `tasks` crate; this crate wires it to
//! signals and DOM events.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
