//! # perfumism-client
//!
//! Leptos + WASM front-end for the Perfumism perfume recommendation service.
//!
//! This crate contains pages, presentational components, session state, the
//! generic form controller, and typed wrappers for every REST endpoint the
//! backend exposes. The backend itself is an external collaborator reached
//! over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
