//! Rendering: draws trail markers to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Each frame clears the whole surface and redraws every marker, so nothing
//! survives from a previous frame unless it is still in the buffer.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::overlay::TrailOverlay::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::TRAIL_MARKER_RADIUS_PX;
use crate::trail::TrailMarker;

/// Marker fill colour.
const MARKER_FILL: &str = "#a855f7";

/// Blur radius of the marker glow in CSS pixels.
const MARKER_GLOW_PX: f64 = 8.0;

/// Clear the surface and draw `markers` in order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    markers: &[TrailMarker],
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    clear(ctx, viewport_w, viewport_h, dpr)?;

    ctx.set_fill_style_str(MARKER_FILL);
    ctx.set_shadow_color(MARKER_FILL);
    ctx.set_shadow_blur(MARKER_GLOW_PX);
    for marker in markers {
        let radius = TRAIL_MARKER_RADIUS_PX * marker.scale;
        if radius <= 0.0 {
            continue;
        }
        ctx.set_global_alpha(marker.opacity.clamp(0.0, 1.0));
        ctx.begin_path();
        ctx.arc(marker.x, marker.y, radius, 0.0, TAU)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Wipe every pixel of the surface.
///
/// # Errors
///
/// Returns `Err` if resetting the transform fails.
pub fn clear(ctx: &CanvasRenderingContext2d, viewport_w: f64, viewport_h: f64, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    Ok(())
}
