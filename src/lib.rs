//! # portfolio-ui
//!
//! WASM enhancement layer for the static portfolio page. Persists the
//! visitor's theme, font and color palette choices and wires the page's
//! small interactive widgets (settings sidebar, scroll-to-top button,
//! portfolio filter, contact form acknowledgement).
//!
//! Controllers are written against the [`dom::Document`] seam and the
//! [`util::storage::PreferenceStore`] trait, so the same logic runs in the
//! browser (feature `hydrate`) and against the in-memory
//! `HeadlessDocument` in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;


/// Browser entry point: installs the panic hook and console logger, then
/// bootstraps the page once the DOM is ready.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed, which keeps logging.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {err}");
    }
    dom::web::boot_when_ready();
}
