//! # portfolio-web
//!
//! Leptos + WASM behavior layer for a static personal-portfolio site.
//! Replaces the hand-written JavaScript glue with a Rust-native client:
//! scrollspy-driven navigation highlighting, the mobile menu, the project
//! filter/expand grid, the ambient particle backdrop, the hero typewriter,
//! and the dark-mode toggle.
//!
//! Behavior logic that needs no browser lives in the `pagefx` crate; this
//! crate owns the components, shared state, and DOM/timer wiring. Browser
//! dependencies sit behind the `csr` feature so the crate tests natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install diagnostics and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
