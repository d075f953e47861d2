//! Start-view camera animation.
//!
//! Shortly after startup the map flies to a fixed target. The animation is a
//! pure function of elapsed time; the host samples it on its own frame clock
//! and applies each frame to its viewport. It never touches digitizer state.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::time::Duration;

use crate::consts::{
    LEVEL_ZERO_RESOLUTION, RESOLUTION_LEVELS, START_VIEW_DELAY_MS, START_VIEW_DURATION_MS, START_VIEW_LAT,
    START_VIEW_LEVEL, START_VIEW_LON,
};
use crate::coord::{GeographicCoordinate, ProjectedCoordinate};
use crate::projection;

/// Resolution (meters per pixel) of pyramid `level`, or `None` past the last level.
#[must_use]
pub fn resolution_for_level(level: usize) -> Option<f64> {
    (level < RESOLUTION_LEVELS).then(|| level_resolution(level))
}

fn level_resolution(level: usize) -> f64 {
    LEVEL_ZERO_RESOLUTION / f64::from(1u32 << level)
}

/// A camera position: plane center plus resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub center: ProjectedCoordinate,
    pub resolution: f64,
}

/// Center-and-zoom animation between two camera frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    pub from: CameraFrame,
    pub to: CameraFrame,
    pub delay: Duration,
    pub duration: Duration,
}

impl CameraAnimation {
    /// Camera frame `elapsed` after the animation was started.
    ///
    /// Holds `from` during the delay and `to` once finished. The center moves
    /// linearly; the resolution geometrically.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> CameraFrame {
        let t = self.progress(elapsed);
        if t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        let resolution = if self.from.resolution > 0.0 && self.to.resolution > 0.0 {
            (lerp(self.from.resolution.ln(), self.to.resolution.ln())).exp()
        } else {
            lerp(self.from.resolution, self.to.resolution)
        };
        CameraFrame {
            center: ProjectedCoordinate::new(
                lerp(self.from.center.x, self.to.center.x),
                lerp(self.from.center.y, self.to.center.y),
            ),
            resolution,
        }
    }

    /// Whether the animation has reached its final frame.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Where the map flies to on startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartView {
    pub target: GeographicCoordinate,
    pub resolution: f64,
    pub delay: Duration,
    pub duration: Duration,
}

impl StartView {
    /// Central Australia at pyramid level 5.
    #[must_use]
    pub fn default_target() -> Self {
        Self {
            target: GeographicCoordinate::new(START_VIEW_LON, START_VIEW_LAT),
            resolution: level_resolution(START_VIEW_LEVEL),
            delay: Duration::from_millis(START_VIEW_DELAY_MS),
            duration: Duration::from_millis(START_VIEW_DURATION_MS),
        }
    }

    /// Build the animation from the camera's current frame.
    #[must_use]
    pub fn animation_from(&self, current: CameraFrame) -> CameraAnimation {
        CameraAnimation {
            from: current,
            to: CameraFrame { center: projection::to_projected(self.target), resolution: self.resolution },
            delay: self.delay,
            duration: self.duration,
        }
    }
}
