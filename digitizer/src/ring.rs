//! The in-progress vertex chain for the polygon currently being traced.

#[cfg(test)]
#[path = "ring_test.rs"]
mod ring_test;

use crate::coord::{GeographicCoordinate, ProjectedCoordinate, Vertex};

/// Ordered vertices of the ring under construction.
///
/// Insertion order defines winding and which vertices are compared for
/// closure. Both coordinate representations live in one `Vertex` list, so
/// they always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InProgressRing {
    vertices: Vec<Vertex>,
}

impl InProgressRing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[must_use]
    pub fn first(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn geographic(&self) -> impl Iterator<Item = GeographicCoordinate> + '_ {
        self.vertices.iter().map(Vertex::geographic)
    }

    pub fn projected(&self) -> impl Iterator<Item = ProjectedCoordinate> + '_ {
        self.vertices.iter().map(Vertex::projected)
    }

    /// The two most recent vertices, oldest first, once there are at least two.
    #[must_use]
    pub fn last_segment(&self) -> Option<(Vertex, Vertex)> {
        match self.vertices.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}
