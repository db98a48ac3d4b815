//! Timing-driven visual effects for the portfolio site.
//!
//! This crate holds the stateful parts of the site's decoration as plain,
//! host-independent state machines. Each engine takes explicit inputs
//! (pointer positions, the current time in milliseconds) and exposes its
//! state for the host to draw. Scheduling primitives (animation frames,
//! browser timers) live in the host; the engines only say what is due next.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`trail`] | Bounded, decaying pointer-trail buffer and its pure tick transition |
//! | [`loader`] | Staged progress simulator with one-shot completion |
//! | [`timer`] | Millisecond one-shot deadlines shared by delayed transitions |
//! | [`increments`] | Increment sources feeding the loader (random, fixed, closures) |
//! | [`config`] | Tuning parameters, validation, and JSON overrides |
//! | [`render`] | Draws trail markers onto a 2D canvas context |
//! | [`overlay`] | Browser overlay owning the trail canvas and its [`trail::Trail`] |
//! | [`consts`] | Default tuning constants |

pub mod config;
pub mod consts;
pub mod increments;
pub mod loader;
pub mod overlay;
pub mod render;
pub mod timer;
pub mod trail;

pub use config::{ConfigError, LoaderConfig, TrailConfig};
