//! Tuning parameters for the trail and loader engines.
//!
//! Every field has a default matching [`crate::consts`]. Hosts may override
//! any subset from JSON; missing fields keep their defaults. Values are
//! checked by `validate` before an engine accepts them.

use serde::{Deserialize, Serialize};

use crate::consts::{
    LOADER_MAX_INCREMENT, LOADER_MIN_TICK_INTERVAL_MS, LOADER_PHASES, LOADER_SETTLE_DELAY_MS,
    LOADER_TICK_INTERVAL_MS, TRAIL_DECAY, TRAIL_FADE_THRESHOLD, TRAIL_MAX_POINTS, TRAIL_MAX_POINTS_LIMIT,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned when tuning values are unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The trail must be able to hold at least one point.
    #[error("trail max_points must be at least 1")]
    ZeroCapacity,
    #[error("trail max_points must be at most 10000, got {0}")]
    CapacityTooLarge(usize),
    /// Decay must shrink opacity without zeroing it in one step.
    #[error("trail decay must be in (0, 1), got {0}")]
    InvalidDecay(f64),
    #[error("trail fade_threshold must be in [0, 1), got {0}")]
    InvalidThreshold(f64),
    #[error("loader tick_interval_ms must be finite and at least 1 ms, got {0}")]
    InvalidTickInterval(f64),
    #[error("loader max_increment must be positive, got {0}")]
    InvalidIncrement(f64),
    #[error("loader settle_delay_ms must be non-negative, got {0}")]
    InvalidSettleDelay(f64),
    #[error("loader needs at least one phase label")]
    NoPhases,
    /// The override document was not valid JSON for this config.
    #[error("failed to parse effect config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pointer-trail tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub max_points: usize,
    pub decay: f64,
    pub fade_threshold: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { max_points: TRAIL_MAX_POINTS, decay: TRAIL_DECAY, fade_threshold: TRAIL_FADE_THRESHOLD }
    }
}

impl TrailConfig {
    /// Check that the values describe a bounded, fading trail.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_points > TRAIL_MAX_POINTS_LIMIT {
            return Err(ConfigError::CapacityTooLarge(self.max_points));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(ConfigError::InvalidDecay(self.decay));
        }
        if !(self.fade_threshold >= 0.0 && self.fade_threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(self.fade_threshold));
        }
        Ok(self)
    }

    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(raw)?.validate()
    }
}

/// Staged loader tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub tick_interval_ms: f64,
    pub max_increment: f64,
    pub settle_delay_ms: f64,
    pub phases: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: LOADER_TICK_INTERVAL_MS,
            max_increment: LOADER_MAX_INCREMENT,
            settle_delay_ms: LOADER_SETTLE_DELAY_MS,
            phases: LOADER_PHASES.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl LoaderConfig {
    /// Check that the loader can make progress and has labels to show.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(self.tick_interval_ms.is_finite() && self.tick_interval_ms >= LOADER_MIN_TICK_INTERVAL_MS) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval_ms));
        }
        if !(self.max_increment.is_finite() && self.max_increment > 0.0) {
            return Err(ConfigError::InvalidIncrement(self.max_increment));
        }
        if !(self.settle_delay_ms.is_finite() && self.settle_delay_ms >= 0.0) {
            return Err(ConfigError::InvalidSettleDelay(self.settle_delay_ms));
        }
        if self.phases.is_empty() {
            return Err(ConfigError::NoPhases);
        }
        Ok(self)
    }

    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(raw)?.validate()
    }
}
