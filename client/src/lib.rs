//! # flow-client
//!
//! Leptos + WASM frontend for Flow Innovation: claim fact-checking,
//! innovation news, and personal/community progress tracking against the
//! Flow Innovation REST API.
//!
//! Every API-backed view is built from one reusable piece: a
//! `ResourceDescriptor` (see `resources`) driven through the
//! `idle -> loading -> success | error` cycle in `resource`. The session
//! token lives in `state::session` and is injected via Leptos context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resource;
pub mod resources;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
