//! Pointer trail: a bounded buffer of recent pointer positions that fade out.
//!
//! [`Trail`] is the stateful engine: pointer moves append, frames decay. The
//! tick itself is the pure [`decay_points`] transition and drawing data comes
//! from the pure [`render`] projection, so neither depends on a display.

use std::collections::VecDeque;

use crate::config::{ConfigError, TrailConfig};

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

/// One recorded pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    /// In `0.0..=1.0`. Never increases after the point is recorded.
    pub opacity: f64,
}

impl TrailPoint {
    /// A freshly recorded point at full opacity.
    #[must_use]
    pub fn fresh(x: f64, y: f64) -> Self {
        Self { x, y, opacity: 1.0 }
    }
}

/// Render-ready view of a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMarker {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// Apply one frame of decay and drop everything that faded out.
///
/// Order is preserved, so the result is still oldest-to-newest.
#[must_use]
pub fn decay_points(points: &[TrailPoint], config: &TrailConfig) -> Vec<TrailPoint> {
    points
        .iter()
        .map(|p| TrailPoint { opacity: p.opacity * config.decay, ..*p })
        .filter(|p| p.opacity > config.fade_threshold)
        .collect()
}

/// Project points to markers. Markers shrink as they fade.
#[must_use]
pub fn render<'a>(points: impl IntoIterator<Item = &'a TrailPoint>) -> Vec<TrailMarker> {
    points
        .into_iter()
        .map(|p| TrailMarker { x: p.x, y: p.y, opacity: p.opacity, scale: p.opacity })
        .collect()
}

/// Stateful trail engine.
///
/// After [`Trail::deactivate`] every input is ignored, which makes a frame or
/// pointer event that races teardown harmless.
#[derive(Clone, Debug)]
pub struct Trail {
    config: TrailConfig,
    points: VecDeque<TrailPoint>,
    active: bool,
}

impl Default for Trail {
    fn default() -> Self {
        Self::from_valid(TrailConfig::default())
    }
}

impl Trail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trail with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config fails validation.
    pub fn with_config(config: TrailConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(config.validate()?))
    }

    fn from_valid(config: TrailConfig) -> Self {
        let capacity = config.max_points.saturating_add(1);
        Self { config, points: VecDeque::with_capacity(capacity), active: true }
    }

    // --- Inputs ---

    /// Record a pointer position, evicting the oldest points past capacity.
    pub fn record(&mut self, x: f64, y: f64) {
        if !self.active {
            return;
        }
        self.points.push_back(TrailPoint::fresh(x, y));
        while self.points.len() > self.config.max_points {
            self.points.pop_front();
        }
    }

    /// Advance one frame: decay every point, then drop the faded ones.
    pub fn tick(&mut self) {
        if !self.active || self.points.is_empty() {
            return;
        }
        let decay = self.config.decay;
        let threshold = self.config.fade_threshold;
        for point in &mut self.points {
            point.opacity *= decay;
        }
        self.points.retain(|p| p.opacity > threshold);
    }

    /// Stop accepting input and forget every point. Idempotent.
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("trail: deactivated with {} live points", self.points.len());
        }
        self.active = false;
        self.points.clear();
    }

    // --- Queries ---

    /// Markers for the current buffer, oldest first.
    #[must_use]
    pub fn markers(&self) -> Vec<TrailMarker> {
        render(&self.points)
    }

    /// Points oldest-to-newest.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
