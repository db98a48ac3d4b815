//! Wall-clock access for timer-driven state.
//!
//! State modules take `now_ms` as a parameter; this is the one place that
//! reads the browser clock. Outside the browser the clock reads zero.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current wall-clock time in milliseconds via `Date.now()`.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Seed for per-session randomness (loader increments).
pub fn entropy_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        js_sys::Date::now().to_bits() ^ (jitter << 32)
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
