//! # jobboard-client
//!
//! Leptos + WASM frontend for the job board. Job seekers browse and apply to
//! postings; companies publish postings and schedule interviews.
//!
//! This crate contains the dual-role session store, the route guard, the
//! typed REST client, and the pages. The `server` crate renders it with SSR
//! and serves the hydrating bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    let config = config::ClientConfig::from_build_env();
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);
    log::debug!("api base url: {}", config.api_base_url);
    leptos::mount::hydrate_body(app::App);
}
