//! Coordinate types for the three spaces a click passes through.
//!
//! A pointer position starts as a [`ScreenPoint`] (window pixels), becomes a
//! [`ProjectedCoordinate`] through the viewport, and is stored alongside its
//! [`GeographicCoordinate`]. The two map-space types only convert through
//! [`crate::projection`].

#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_MERCATOR_LATITUDE;
use crate::projection;

/// A pixel position in window space, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in pixels.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinate {
    pub lon: f64,
    pub lat: f64,
}

impl GeographicCoordinate {
    #[must_use]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Whether the coordinate can be projected without leaving the mercator square.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && self.lon.abs() <= 180.0
            && self.lat.abs() <= MAX_MERCATOR_LATITUDE
    }
}

/// Planar position in the spherical-mercator plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCoordinate {
    pub x: f64,
    pub y: f64,
}

impl ProjectedCoordinate {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in plane units.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<ProjectedCoordinate> for geo::Coord<f64> {
    fn from(p: ProjectedCoordinate) -> Self {
        geo::Coord { x: p.x, y: p.y }
    }
}

impl From<GeographicCoordinate> for geo::Coord<f64> {
    fn from(g: GeographicCoordinate) -> Self {
        geo::Coord { x: g.lon, y: g.lat }
    }
}

/// One traced point, held in both map-space representations.
///
/// Fields are private so the projected half is always derived from the
/// geographic half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    geographic: GeographicCoordinate,
    projected: ProjectedCoordinate,
}

impl Vertex {
    /// Build a vertex from a geographic position, projecting it forward.
    #[must_use]
    pub fn from_geographic(geographic: GeographicCoordinate) -> Self {
        Self { geographic, projected: projection::to_projected(geographic) }
    }

    /// Build a vertex from a plane position.
    ///
    /// The projected half is re-derived from the inverse so both halves agree
    /// with each other up to floating-point error.
    #[must_use]
    pub fn from_projected(projected: ProjectedCoordinate) -> Self {
        Self::from_geographic(projection::to_geographic(projected))
    }

    #[must_use]
    pub fn geographic(&self) -> GeographicCoordinate {
        self.geographic
    }

    #[must_use]
    pub fn projected(&self) -> ProjectedCoordinate {
        self.projected
    }
}
