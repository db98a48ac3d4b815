//! Bridge component between the page and the imperative `effects::overlay::TrailOverlay`.
//!
//! ARCHITECTURE
//! ============
//! The overlay owns its canvas and the trail buffer. This host wires window
//! pointer/resize events into it and drives one `frame()` per animation frame.
//!
//! Teardown removes the listeners at once and clears an `alive` flag. The
//! frame already requested at that point still runs: it sees the flag, wipes
//! the canvas, deactivates the trail, and does not request another frame.
//! The same shutdown runs whenever a frame cannot be requested.

use leptos::prelude::*;

use effects::TrailConfig;

#[cfg(feature = "csr")]
use effects::overlay::TrailOverlay;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use std::sync::Arc;
#[cfg(feature = "csr")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(test)]
#[path = "cursor_trail_test.rs"]
mod cursor_trail_test;

#[cfg(feature = "csr")]
type FrameCallback = Closure<dyn FnMut(f64)>;

#[cfg(feature = "csr")]
fn request_frame(cb: &FrameCallback) -> bool {
    web_sys::window().is_some_and(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
}

#[cfg(feature = "csr")]
fn sync_viewport(overlay: &mut TrailOverlay) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    overlay.set_viewport(width, height, window.device_pixel_ratio());
}

/// What the frame loop does after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStep {
    /// Another frame is queued.
    Continue,
    /// Wipe the canvas, deactivate the trail, drop the callback.
    Stop,
}

/// Keep looping only while the host is alive and the next frame was queued.
#[must_use]
pub fn next_step(alive: bool, rescheduled: bool) -> FrameStep {
    if alive && rescheduled { FrameStep::Continue } else { FrameStep::Stop }
}

#[cfg(feature = "csr")]
fn stop(overlay: &RefCell<TrailOverlay>) {
    if let Err(err) = overlay.borrow_mut().shutdown() {
        log::warn!("cursor trail: shutdown failed: {err:?}");
    }
}

/// Self-resubmitting animation-frame loop for `overlay`.
#[cfg(feature = "csr")]
fn start_frame_loop(overlay: Rc<RefCell<TrailOverlay>>, alive: Arc<AtomicBool>) {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let overlay_for_cb = Rc::clone(&overlay);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let live = alive.load(Ordering::Relaxed);
        if live {
            if let Err(err) = overlay_for_cb.borrow_mut().frame() {
                log::warn!("cursor trail: frame failed: {err:?}");
            }
        }
        let rescheduled = live && holder_for_cb.borrow().as_ref().is_some_and(request_frame);
        if next_step(live, rescheduled) == FrameStep::Stop {
            stop(&overlay_for_cb);
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if next_step(true, request_frame(&cb)) == FrameStep::Continue {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("cursor trail: animation frames unavailable");
        stop(&overlay);
    }
}

/// Full-viewport, pointer-transparent canvas that draws the pointer trail.
#[component]
pub fn CursorTrail(config: TrailConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let overlay = match TrailOverlay::new(canvas, config.clone()) {
                Ok(overlay) => Rc::new(RefCell::new(overlay)),
                Err(err) => {
                    log::warn!("cursor trail disabled: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut overlay.borrow_mut());

            let alive = Arc::new(AtomicBool::new(true));
            let overlay_move = Rc::clone(&overlay);
            let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
                overlay_move.borrow_mut().on_pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()));
            });
            let overlay_resize = Rc::clone(&overlay);
            let on_resize = window_event_listener(leptos::ev::resize, move |_| {
                sync_viewport(&mut overlay_resize.borrow_mut());
            });
            start_frame_loop(overlay, Arc::clone(&alive));

            on_cleanup(move || {
                alive.store(false, Ordering::Relaxed);
                on_move.remove();
                on_resize.remove();
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! {
        <canvas
            class="cursor-trail"
            style="position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:60"
            node_ref=canvas_ref
            aria-hidden="true"
        ></canvas>
    }
}
