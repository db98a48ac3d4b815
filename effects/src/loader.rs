//! Staged progress simulator for the loading screen.
//!
//! The loader is driven entirely by [`Loader::advance`] with the current time.
//! Ticks are processed at their scheduled times, so a host that wakes late
//! still sees every tick in order. The completion callback is stored as an
//! `FnOnce` and taken when it fires; once taken it cannot run again.
//!
//! ```text
//! Running ──tick reaches 100──▶ Completing ──settle delay──▶ Done
//!    │                              │
//!    └──────────cancel()────────────┴──────────▶ Cancelled
//! ```

use crate::config::{ConfigError, LoaderConfig};
use crate::consts::LOADER_COMPLETE_PROGRESS;
use crate::increments::{IncrementSource, sanitize};
use crate::timer::{OneShot, earliest};

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

/// Lifecycle of a loader instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderState {
    /// Ticking toward 100.
    Running,
    /// Clamped at 100, waiting for the settle delay.
    Completing,
    /// Completion callback has fired.
    Done,
    /// Torn down before completion.
    Cancelled,
}

impl LoaderState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Observable change produced by [`Loader::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum LoaderEvent {
    /// A tick moved progress below 100.
    Progressed { progress: f64, phase_index: usize },
    /// A tick reached 100; the repeating timer is stopped.
    Clamped { phase_index: usize },
    /// The settle delay elapsed and the callback ran.
    Completed,
}

/// Map progress onto a phase index in `0..phase_count`.
///
/// Returns 0 when there are no phases, so callers can index safely after
/// checking the list is non-empty.
#[must_use]
pub fn phase_index(progress: f64, phase_count: usize) -> usize {
    if phase_count == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = ((progress.max(0.0) / LOADER_COMPLETE_PROGRESS) * phase_count as f64).floor() as usize;
    index.min(phase_count - 1)
}

type Callback = Box<dyn FnOnce()>;

/// Staged loader engine.
pub struct Loader<S: IncrementSource> {
    config: LoaderConfig,
    source: S,
    progress: f64,
    state: LoaderState,
    ticks: u32,
    next_tick: OneShot,
    settle: OneShot,
    on_complete: Option<Callback>,
}

impl<S: IncrementSource> std::fmt::Debug for Loader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("progress", &self.progress)
            .field("state", &self.state)
            .field("ticks", &self.ticks)
            .field("next_tick", &self.next_tick)
            .field("settle", &self.settle)
            .finish_non_exhaustive()
    }
}

impl<S: IncrementSource> Loader<S> {
    /// Start a loader at `Running(0)` with its first tick one interval after
    /// `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the config fails validation.
    pub fn new(
        config: LoaderConfig,
        source: S,
        on_complete: impl FnOnce() + 'static,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let mut next_tick = OneShot::new();
        next_tick.arm(now_ms, config.tick_interval_ms);
        Ok(Self {
            config,
            source,
            progress: 0.0,
            state: LoaderState::Running,
            ticks: 0,
            next_tick,
            settle: OneShot::new(),
            on_complete: Some(Box::new(on_complete)),
        })
    }

    /// Run every tick and deadline due at `now_ms`, in order.
    pub fn advance(&mut self, now_ms: f64) -> Vec<LoaderEvent> {
        let mut events = Vec::new();

        while self.state == LoaderState::Running {
            let Some(due) = self.next_tick.due_ms() else {
                break;
            };
            if !self.next_tick.fire_if_due(now_ms) {
                break;
            }
            events.push(self.tick(due));
        }

        if self.state == LoaderState::Completing && self.settle.fire_if_due(now_ms) {
            self.state = LoaderState::Done;
            if let Some(callback) = self.on_complete.take() {
                log::debug!("loader: complete after {} ticks", self.ticks);
                callback();
            }
            events.push(LoaderEvent::Completed);
        }

        events
    }

    /// One tick at its scheduled time `at_ms`. Only called while running.
    fn tick(&mut self, at_ms: f64) -> LoaderEvent {
        self.ticks += 1;
        let increment = sanitize(self.source.next_increment(self.config.max_increment));
        let raw = self.progress + increment;

        if raw >= LOADER_COMPLETE_PROGRESS {
            self.progress = LOADER_COMPLETE_PROGRESS;
            self.state = LoaderState::Completing;
            self.next_tick.cancel();
            self.settle.arm(at_ms, self.config.settle_delay_ms);
            log::debug!("loader: clamped at 100 on tick {}", self.ticks);
            return LoaderEvent::Clamped { phase_index: self.phase_index() };
        }

        self.progress = raw;
        self.next_tick.arm(at_ms, self.config.tick_interval_ms);
        LoaderEvent::Progressed { progress: self.progress, phase_index: self.phase_index() }
    }

    /// Tear down. Stops both timers and drops the callback unfired.
    ///
    /// Safe to call repeatedly and after completion.
    pub fn cancel(&mut self) {
        self.next_tick.cancel();
        self.settle.cancel();
        if self.state.is_terminal() {
            return;
        }
        log::debug!("loader: cancelled at {:.1}%", self.progress);
        self.state = LoaderState::Cancelled;
        self.on_complete = None;
    }

    // --- Queries ---

    /// Current progress in `0.0..=100.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress rounded for display.
    #[must_use]
    pub fn percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.progress.round().clamp(0.0, LOADER_COMPLETE_PROGRESS) as u8;
        rounded
    }

    #[must_use]
    pub fn phase_index(&self) -> usize {
        phase_index(self.progress, self.config.phases.len())
    }

    /// Label for the current phase.
    #[must_use]
    pub fn phase_label(&self) -> &str {
        self.config.phases.get(self.phase_index()).map_or("", String::as_str)
    }

    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Number of ticks processed so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Earliest pending deadline, or `None` once nothing more will happen.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        earliest(self.next_tick.due_ms(), self.settle.due_ms())
    }

    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}
