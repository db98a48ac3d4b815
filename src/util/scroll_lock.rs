//! Body scroll lock while a modal is open.
//!
//! TRADE-OFFS
//! ==========
//! Style writes are best-effort browser-only behavior; outside the browser
//! this is a no-op.

use crate::state::ui::body_overflow;

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Apply `overflow` to `<body>` for the given viewer state.
pub fn apply(viewer_open: bool) {
    let value = body_overflow(viewer_open);
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            if let Err(err) = body.style().set_property("overflow", value) {
                log::warn!("scroll lock: failed to set overflow: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Restore normal scrolling.
pub fn release() {
    apply(false);
}
