//! Application state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust structs held in `RwSignal`s and provided via
//! Leptos context. Delayed transitions take an explicit `now_ms` so they can
//! be tested without a browser clock.

pub mod contact;
pub mod gallery;
pub mod ui;
