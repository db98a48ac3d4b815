//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clock, timers, document styles)
//! from components so component logic stays testable off the browser.

pub mod clock;
pub mod deadline;
pub mod scroll_lock;
