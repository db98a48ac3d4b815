//! # portfolio
//!
//! Leptos + WASM single-page portfolio site.
//!
//! This crate holds the page components, UI state, the embedded site content
//! catalog, and the browser drivers for the `effects` crate's pointer trail and
//! staged loading screen. Build with the `csr` feature for the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;
