//! Spherical-mercator projection between geographic and plane coordinates.
//!
//! Everything here is a pure function. The viewport supplies the only
//! context-dependent step (screen to plane); when it is absent the
//! conversion yields `None` and the caller drops the event.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::f64::consts::PI;

use crate::consts::ORIGIN_SHIFT;
use crate::coord::{GeographicCoordinate, ProjectedCoordinate, ScreenPoint, Vertex};
use crate::viewport::Viewport;

/// Forward projection: degrees to mercator meters.
#[must_use]
pub fn to_projected(geo: GeographicCoordinate) -> ProjectedCoordinate {
    let x = geo.lon * ORIGIN_SHIFT / 180.0;
    let y = ((90.0 + geo.lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    ProjectedCoordinate::new(x, y * ORIGIN_SHIFT / 180.0)
}

/// Inverse projection: mercator meters to degrees.
#[must_use]
pub fn to_geographic(projected: ProjectedCoordinate) -> GeographicCoordinate {
    let lon = projected.x / ORIGIN_SHIFT * 180.0;
    let lat = projected.y / ORIGIN_SHIFT * 180.0;
    let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
    GeographicCoordinate::new(lon, lat)
}

/// Convert a window position to degrees through the current viewport.
///
/// Returns `None` when no viewport is available yet.
#[must_use]
pub fn screen_to_geographic<V: Viewport + ?Sized>(screen: ScreenPoint, viewport: Option<&V>) -> Option<GeographicCoordinate> {
    let viewport = viewport?;
    Some(to_geographic(viewport.screen_to_world(screen)))
}

/// Convert a window position straight to a [`Vertex`].
#[must_use]
pub fn screen_to_vertex<V: Viewport + ?Sized>(screen: ScreenPoint, viewport: Option<&V>) -> Option<Vertex> {
    screen_to_geographic(screen, viewport).map(Vertex::from_geographic)
}
