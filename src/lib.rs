//! # pokedex
//!
//! Leptos + WASM lookup widget for a public creature catalog. The user types
//! a creature name, the app issues one REST call to PokeAPI, and the result
//! is rendered as a summary card (name, sprites, physical stats, elemental
//! types) with a cosmetic light/dark display toggle.
//!
//! This crate contains the page, components, application state, network
//! types, and the catalog API client. The lookup lifecycle itself lives in
//! `state::lookup` as plain data so it stays testable without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the hydration bootstrap script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
