//! # client
//!
//! Leptos + WASM frontend for the Notewise learning application: search-driven
//! explanation generation, the streaming markdown viewer with embedded Q&A
//! widgets and concept-map diagram, the explanations archive, the notes
//! explorer and editor, reference-book management, and account pages.
//!
//! This crate contains pages, components, application state, network types,
//! and the polling/stream sync drivers. It integrates with the `viewport`
//! crate for the concept-map pan/zoom transform.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
