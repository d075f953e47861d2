//! Map viewport: the screen-to-plane transform and current resolution.
//!
//! The host map engine normally owns the real viewport. [`Viewport`] is the
//! narrow view of it the digitizer needs; [`MapViewport`] is a concrete,
//! north-up implementation used by the replay binary and the tests.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::coord::{ProjectedCoordinate, ScreenPoint};

/// What the digitizer reads from the host's viewport.
pub trait Viewport {
    /// Convert a window pixel position to plane coordinates.
    fn screen_to_world(&self, screen: ScreenPoint) -> ProjectedCoordinate;

    /// Current plane units per screen pixel.
    fn resolution(&self) -> f64;
}

/// Rejected viewport parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("resolution must be finite and positive, got {0}")]
    InvalidResolution(f64),
    #[error("viewport size must be finite and positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// North-up viewport centered on a plane position.
///
/// `width` / `height` are in screen pixels. Screen y grows downward while
/// plane y grows northward, so the y axis flips between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    center: ProjectedCoordinate,
    resolution: f64,
    width: f64,
    height: f64,
}

impl MapViewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` or the size is not finite and positive.
    pub fn new(center: ProjectedCoordinate, resolution: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        check_resolution(resolution)?;
        check_size(width, height)?;
        Ok(Self { center, resolution, width, height })
    }

    #[must_use]
    pub fn center(&self) -> ProjectedCoordinate {
        self.center
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Convert a plane position back to window pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: ProjectedCoordinate) -> ScreenPoint {
        ScreenPoint::new(
            (world.x - self.center.x) / self.resolution + self.width * 0.5,
            (self.center.y - world.y) / self.resolution + self.height * 0.5,
        )
    }

    /// Resize the window without moving the center.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not finite and positive.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ViewportError> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Move the camera to `center` at `resolution`.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is not finite and positive.
    pub fn center_on(&mut self, center: ProjectedCoordinate, resolution: f64) -> Result<(), ViewportError> {
        check_resolution(resolution)?;
        self.center = center;
        self.resolution = resolution;
        Ok(())
    }
}

impl Viewport for MapViewport {
    fn screen_to_world(&self, screen: ScreenPoint) -> ProjectedCoordinate {
        ProjectedCoordinate::new(
            self.center.x + (screen.x - self.width * 0.5) * self.resolution,
            self.center.y - (screen.y - self.height * 0.5) * self.resolution,
        )
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}

fn check_resolution(resolution: f64) -> Result<(), ViewportError> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidResolution(resolution))
    }
}

fn check_size(width: f64, height: f64) -> Result<(), ViewportError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidSize { width, height })
    }
}
