//! Recorded pointer-event scripts and their replay through a session.
//!
//! A script is a JSON array of events, for example:
//!
//! ```json
//! [{"down": [400, 300]}, {"up": [400, 300]}, {"zoom": 50.0}, {"resize": [1024, 768]}]
//! ```
//!
//! Replay plays the role of the UI binding layer: it owns the viewport,
//! forwards pointer events to the session and collects requested layers.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use digitizer::coord::ScreenPoint;
use digitizer::render::LayerLog;
use digitizer::session::{Action, Session};
use digitizer::viewport::{MapViewport, ViewportError};
use serde::Deserialize;
use tracing::debug;

/// One recorded host event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Pointer pressed at window `[x, y]`.
    Down([f64; 2]),
    /// Pointer released at window `[x, y]`.
    Up([f64; 2]),
    /// Window resized to `[width, height]`.
    Resize([f64; 2]),
    /// Camera resolution changed (plane units per pixel), center kept.
    Zoom(f64),
}

/// Parse a script from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of known events.
pub fn parse(text: &str) -> Result<Vec<ScriptEvent>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Counters for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub vertices: usize,
    pub drags: usize,
    pub ignored: usize,
    pub completed: usize,
    pub failed: usize,
}

impl ReplayStats {
    fn record(&mut self, action: &Action) {
        match action {
            Action::VertexAdded { .. } => self.vertices += 1,
            Action::DragIgnored => self.drags += 1,
            Action::Ignored => self.ignored += 1,
            Action::PolygonCompleted(_) => self.completed += 1,
            Action::FinalizeFailed(_) => self.failed += 1,
        }
    }
}

/// Feed `events` to `session` against `viewport`, recording layers in `layers`.
///
/// # Errors
///
/// Returns an error if a resize or zoom event carries invalid values.
pub fn replay(
    events: &[ScriptEvent],
    session: &mut Session,
    viewport: &mut MapViewport,
    layers: &mut LayerLog,
) -> Result<ReplayStats, ViewportError> {
    let mut stats = ReplayStats::default();
    for (i, event) in events.iter().enumerate() {
        debug!(index = i, ?event, "replaying event");
        match *event {
            ScriptEvent::Down([x, y]) => session.on_pointer_down(ScreenPoint::new(x, y)),
            ScriptEvent::Up([x, y]) => {
                for action in session.on_pointer_up(ScreenPoint::new(x, y), Some(&*viewport), layers) {
                    stats.record(&action);
                }
            }
            ScriptEvent::Resize([w, h]) => viewport.set_size(w, h)?,
            ScriptEvent::Zoom(resolution) => viewport.center_on(viewport.center(), resolution)?,
        }
    }
    Ok(stats)
}
