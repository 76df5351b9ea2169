//! # countdown-web
//!
//! Leptos + WASM frontend for the countdown timer widget. The `countdown`
//! crate owns the lifecycle logic and calendar math; this crate owns the
//! browser: components, the page that wires submit/tick/reset together, and
//! the util glue for local storage, the wall clock, the interval timer, and
//! the blocking alert.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: install browser diagnostics, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
