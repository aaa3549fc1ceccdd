//! AgriAI Hub Web Frontend
//!
//! Leptos-based WASM frontend. Everything runs in the browser: the mock
//! database lives in `localStorage` and every "AI" result is simulated.

mod app;
mod components;
mod dom;
mod pages;
mod state;
mod storage;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
