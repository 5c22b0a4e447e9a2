//! # client
//!
//! Leptos + WASM frontend for the Ink Over Matter studio site.
//!
//! This crate contains the pages, components, per-component state machines,
//! and the REST client used to talk to the studio API (gallery listing,
//! booking intake, and the chat assistant). The `server` crate renders the
//! root [`app::App`] with the `ssr` feature; the browser bundle is built with
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("hydrating studio site (api base {})", config::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
