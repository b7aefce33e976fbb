//! # client
//!
//! Leptos + WASM frontend for the procurement assistant console.
//!
//! This crate contains the shell, the chat and dashboard pages, their state
//! models, presentation components, and the REST client used to talk to the
//! procurement backend. The host binary renders it with SSR and the browser
//! hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
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
