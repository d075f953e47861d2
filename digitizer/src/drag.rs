//! Click-versus-drag discrimination.
//!
//! The map pans on the same button that adds vertices, so every release is
//! compared with the matching press. Anything that travelled further than the
//! threshold was a pan and must not add a vertex.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::coord::ScreenPoint;

/// Outcome of a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Vertex-adding click.
    Click,
    /// Pan gesture; ignored by the digitizer.
    Drag,
}

/// Whether the pointer travelled further than `threshold` pixels.
///
/// A missing position on either end is treated as a click.
#[must_use]
pub fn is_drag(down: Option<ScreenPoint>, up: Option<ScreenPoint>, threshold: f64) -> bool {
    match (down, up) {
        (Some(down), Some(up)) => down.distance(up) > threshold,
        _ => false,
    }
}

/// Holds the pointer-down snapshot between press and release.
#[derive(Debug, Clone, Copy)]
pub struct DragFilter {
    threshold: f64,
    down: Option<ScreenPoint>,
}

impl DragFilter {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, down: None }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Snapshot returned by the last press, if it has not been released yet.
    #[must_use]
    pub fn pending(&self) -> Option<ScreenPoint> {
        self.down
    }

    /// Record a pointer-down position, replacing any earlier snapshot.
    pub fn press(&mut self, screen: ScreenPoint) {
        self.down = Some(screen);
    }

    /// Classify the release and clear the snapshot.
    pub fn release(&mut self, screen: ScreenPoint) -> Gesture {
        let down = self.down.take();
        if is_drag(down, Some(screen), self.threshold) {
            Gesture::Drag
        } else {
            Gesture::Click
        }
    }
}
