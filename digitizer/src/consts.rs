//! Shared numeric constants for the digitizer crate.

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel, in screen pixels, above which a press/release pair is a drag.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

// ── Ring closure ────────────────────────────────────────────────

/// Scale applied to the start-marker symbol.
pub const SYMBOL_SCALE: f64 = 0.4;

/// Nominal symbol size in screen pixels before scaling.
pub const SYMBOL_PIXEL_RADIUS: f64 = 32.0;

/// A triangle plus the closing vertex.
pub const MIN_RING_VERTICES: usize = 4;

// ── Projection ──────────────────────────────────────────────────

/// Sphere radius used by web-mercator, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude at which web-mercator maps to a square world.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_78;

/// Half the world width in projected meters.
pub const ORIGIN_SHIFT: f64 = std::f64::consts::PI * EARTH_RADIUS_M;

/// Meters per pixel at zoom level 0 for 256 px tiles.
pub const LEVEL_ZERO_RESOLUTION: f64 = 156_543.033_928_040_97;

/// Number of levels in the standard resolution pyramid.
pub const RESOLUTION_LEVELS: usize = 20;

// ── Start view ──────────────────────────────────────────────────

/// Longitude of the initial camera target (central Australia).
pub const START_VIEW_LON: f64 = 133.7751;

/// Latitude of the initial camera target.
pub const START_VIEW_LAT: f64 = -25.2744;

/// Pyramid level the start view zooms to.
pub const START_VIEW_LEVEL: usize = 5;

/// Delay before the start-view animation begins, in milliseconds.
pub const START_VIEW_DELAY_MS: u64 = 500;

/// Duration of the start-view animation, in milliseconds.
pub const START_VIEW_DURATION_MS: u64 = 2000;
