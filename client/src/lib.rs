//! # client
//!
//! Leptos + WASM frontend for Streamhall: sign-in and account pages, the
//! video catalog, and the HLS player.
//!
//! The crate is compiled twice: with `hydrate` into the browser bundle and
//! with `ssr` into the Axum host, which renders `app::shell`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
