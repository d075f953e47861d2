//! Finalized polygons and the append-only registry that holds them.
//!
//! [`finalize`] turns a ring that passed the closure check into an immutable
//! [`CompletedPolygon`]. It works on a copy: the snapped closing vertex is
//! only ever part of the emitted polygon, so a failed finalize leaves the
//! caller's ring exactly as the user traced it.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use geo::{Area, BoundingRect, LineString, Polygon};
use uuid::Uuid;

use crate::coord::{GeographicCoordinate, ProjectedCoordinate, Vertex};
use crate::ring::InProgressRing;

/// Unique identifier for a completed polygon.
pub type PolygonId = Uuid;

/// Why a ring could not be turned into a polygon.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("ring has no vertices")]
    Empty,
    #[error("ring needs at least 3 distinct vertices, found {distinct}")]
    TooFewDistinct { distinct: usize },
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
    #[error("ring encloses no area")]
    ZeroArea,
}

/// An immutable closed polygon; first and last vertices are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedPolygon {
    id: PolygonId,
    vertices: Vec<Vertex>,
}

impl CompletedPolygon {
    #[must_use]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// All vertices in trace order, closing duplicate included.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn geographic(&self) -> impl Iterator<Item = GeographicCoordinate> + '_ {
        self.vertices.iter().map(Vertex::geographic)
    }

    pub fn projected(&self) -> impl Iterator<Item = ProjectedCoordinate> + '_ {
        self.vertices.iter().map(Vertex::projected)
    }

    /// Boundary in the mercator plane.
    #[must_use]
    pub fn projected_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.projected().collect::<LineString<f64>>(), vec![])
    }

    /// Boundary in lon/lat degrees.
    #[must_use]
    pub fn geographic_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.geographic().collect::<LineString<f64>>(), vec![])
    }

    /// Enclosed area in square plane units (mercator meters, not ground area).
    #[must_use]
    pub fn planar_area(&self) -> f64 {
        self.projected_polygon().unsigned_area()
    }
}

/// Snap the ring shut on its first vertex and build the polygon.
///
/// The ring itself is not modified.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the ring is empty, holds a non-finite
/// coordinate, has fewer than three distinct vertices, or encloses no area.
pub fn finalize(ring: &InProgressRing) -> Result<CompletedPolygon, GeometryError> {
    let Some(first) = ring.first().copied() else {
        return Err(GeometryError::Empty);
    };
    if let Some(index) = ring.projected().position(|p| !p.is_finite()) {
        return Err(GeometryError::NonFinite { index });
    }

    let distinct = count_distinct(ring.vertices());
    if distinct < 3 {
        return Err(GeometryError::TooFewDistinct { distinct });
    }

    let mut vertices = ring.vertices().to_vec();
    vertices.push(first);
    let polygon = CompletedPolygon { id: Uuid::new_v4(), vertices };

    if is_degenerate(&polygon.projected_polygon()) {
        return Err(GeometryError::ZeroArea);
    }
    Ok(polygon)
}

/// Area negligible relative to the ring's own extent.
fn is_degenerate(polygon: &Polygon<f64>) -> bool {
    let Some(bounds) = polygon.bounding_rect() else {
        return true;
    };
    let extent = bounds.width().max(bounds.height());
    polygon.unsigned_area() <= f64::EPSILON * extent * extent
}

fn count_distinct(vertices: &[Vertex]) -> usize {
    let mut seen: Vec<ProjectedCoordinate> = Vec::with_capacity(vertices.len());
    for p in vertices.iter().map(Vertex::projected) {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen.len()
}

/// Append-only, session-scoped collection of completed polygons.
#[derive(Debug, Clone, Default)]
pub struct PolygonRegistry {
    polygons: Vec<CompletedPolygon>,
}

impl PolygonRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polygon: CompletedPolygon) {
        self.polygons.push(polygon);
    }

    #[must_use]
    pub fn get(&self, id: &PolygonId) -> Option<&CompletedPolygon> {
        self.polygons.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn last(&self) -> Option<&CompletedPolygon> {
        self.polygons.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletedPolygon> {
        self.polygons.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CompletedPolygon] {
        &self.polygons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Drop every polygon. Only an explicit session reset calls this.
    pub fn clear(&mut self) {
        self.polygons.clear();
    }
}
