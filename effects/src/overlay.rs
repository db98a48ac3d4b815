//! Browser overlay for the pointer trail.
//!
//! [`TrailOverlay`] owns one canvas element and the [`Trail`] drawn onto it.
//! The host feeds it pointer moves and calls [`TrailOverlay::frame`] once per
//! animation frame. It never touches any element other than its own canvas.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::TrailConfig;
use crate::render;
use crate::trail::Trail;

/// The trail engine bound to its canvas.
pub struct TrailOverlay {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub trail: Trail,
    viewport_width: f64,
    viewport_height: f64,
    dpr: f64,
}

impl TrailOverlay {
    /// Bind a trail with custom tuning to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid or the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: TrailConfig) -> Result<Self, JsValue> {
        let trail = Trail::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx, trail, viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0 })
    }

    /// Resize the backing store to the viewport in CSS pixels times `dpr`.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = dpr.max(1.0);
        self.canvas.set_width(backing_px(self.viewport_width, self.dpr));
        self.canvas.set_height(backing_px(self.viewport_height, self.dpr));
    }

    /// Record a pointer position in viewport CSS pixels.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.trail.record(x, y);
    }

    /// Advance the trail one frame and redraw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.trail.tick();
        render::draw(&self.ctx, &self.trail.markers(), self.viewport_width, self.viewport_height, self.dpr)
    }

    /// Deactivate the trail and wipe the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if clearing the canvas fails.
    pub fn shutdown(&mut self) -> Result<(), JsValue> {
        self.trail.deactivate();
        render::clear(&self.ctx, self.viewport_width, self.viewport_height, self.dpr)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_px(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().clamp(0.0, f64::from(u32::MAX)) as u32
}
