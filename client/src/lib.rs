//! Chat UI components rendered with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Browser-only behavior is gated behind `hydrate` so SSR and
//! unit tests stay deterministic.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
