//! One-shot wake-ups at absolute deadlines.
//!
//! State machines report their next deadline as an absolute `now_ms` value;
//! [`wake_at`] turns that into a browser timeout. The task owns its own
//! liveness check, so a wake-up after the owner unmounted must be a no-op.

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "deadline_test.rs"]
mod deadline_test;

/// Milliseconds from `now_ms` until `deadline_ms`, clamped for `setTimeout`.
#[must_use]
pub fn delay_until(deadline_ms: f64, now_ms: f64) -> u32 {
    let delay = (deadline_ms - now_ms).ceil();
    if !delay.is_finite() || delay <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let delay = delay.min(f64::from(u32::MAX)) as u32;
    delay
}

/// Run `task` once `deadline_ms` has passed.
pub fn wake_at(deadline_ms: f64, task: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        let delay = delay_until(deadline_ms, super::clock::now_ms());
        Timeout::new(delay, task).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (deadline_ms, task);
    }
}
