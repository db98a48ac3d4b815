//! Default tuning constants for the effects crate.

// ── Pointer trail ───────────────────────────────────────────────

/// Maximum number of points kept in the trail buffer.
pub const TRAIL_MAX_POINTS: usize = 20;

/// Largest `max_points` a config may ask for.
pub const TRAIL_MAX_POINTS_LIMIT: usize = 10_000;

/// Opacity multiplier applied to every point once per frame.
pub const TRAIL_DECAY: f64 = 0.95;

/// Points at or below this opacity are dropped.
pub const TRAIL_FADE_THRESHOLD: f64 = 0.01;

/// Marker radius in CSS pixels at full scale.
pub const TRAIL_MARKER_RADIUS_PX: f64 = 6.0;

// ── Loader ──────────────────────────────────────────────────────

/// Interval between progress ticks.
pub const LOADER_TICK_INTERVAL_MS: f64 = 200.0;

/// Shortest tick interval a config may ask for. Keeps `advance` bounded by elapsed time.
pub const LOADER_MIN_TICK_INTERVAL_MS: f64 = 1.0;

/// Exclusive upper bound of a single progress increment.
pub const LOADER_MAX_INCREMENT: f64 = 15.0;

/// Delay between reaching 100% and signalling completion.
pub const LOADER_SETTLE_DELAY_MS: f64 = 500.0;

/// Progress value at which the loader clamps and starts completing.
pub const LOADER_COMPLETE_PROGRESS: f64 = 100.0;

/// Phase labels shown while loading, in order.
pub const LOADER_PHASES: [&str; 5] = [
    "Initializing 3D Space...",
    "Loading Render Engine...",
    "Preparing Shaders...",
    "Setting up Animations...",
    "Almost Ready...",
];
