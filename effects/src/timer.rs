//! Millisecond one-shot deadlines.
//!
//! Delayed transitions (loader settle, viewer clear, form status resets) hold a
//! [`OneShot`] and ask it whether it is due against an injected `now_ms`. The
//! host decides how time actually passes.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// A deadline that fires at most once per arming.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OneShot {
    due_ms: Option<f64>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the deadline `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_ms = Some(now_ms + delay_ms.max(0.0));
    }

    /// Disarm without firing. Safe to call when already disarmed.
    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    /// The armed deadline, if any.
    #[must_use]
    pub fn due_ms(&self) -> Option<f64> {
        self.due_ms
    }

    /// Disarm and return `true` when the deadline has passed.
    pub fn fire_if_due(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines.
#[must_use]
pub fn earliest(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
