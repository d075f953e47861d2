//! Ring-closure detection.
//!
//! A ring closes when the newest vertex lands within a fixed on-screen
//! radius of the first one. The radius is expressed in pixels and converted
//! to plane units with the current resolution, so the target keeps the same
//! apparent size at every zoom level. Exact equality is never required.

#[cfg(test)]
#[path = "closure_test.rs"]
mod closure_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_RING_VERTICES, SYMBOL_PIXEL_RADIUS, SYMBOL_SCALE};
use crate::ring::InProgressRing;

/// Parameters of the closure check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureParams {
    /// Scale of the start-marker symbol.
    pub symbol_scale: f64,
    /// Unscaled symbol size in screen pixels.
    pub symbol_pixel_radius: f64,
    /// Minimum vertex count, including the closing click.
    pub min_vertices: usize,
}

impl Default for ClosureParams {
    fn default() -> Self {
        Self {
            symbol_scale: SYMBOL_SCALE,
            symbol_pixel_radius: SYMBOL_PIXEL_RADIUS,
            min_vertices: MIN_RING_VERTICES,
        }
    }
}

impl ClosureParams {
    /// The closure radius in screen pixels.
    #[must_use]
    pub fn pixel_tolerance(&self) -> f64 {
        self.symbol_scale * self.symbol_pixel_radius
    }
}

/// Closure radius in plane units at `resolution` (plane units per pixel).
#[must_use]
pub fn tolerance_radius(resolution: f64, params: &ClosureParams) -> f64 {
    params.pixel_tolerance() * resolution
}

/// Whether the ring's last vertex is close enough to its first to close it.
#[must_use]
pub fn is_closed(ring: &InProgressRing, resolution: f64, params: &ClosureParams) -> bool {
    if ring.len() < params.min_vertices {
        return false;
    }
    let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
        return false;
    };
    let distance = first.projected().distance(last.projected());
    distance <= tolerance_radius(resolution, params)
}
