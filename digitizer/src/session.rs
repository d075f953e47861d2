//! Digitization session: the pointer-event state machine.
//!
//! A UI binding forwards pointer-down and pointer-up to [`Session`]. On each
//! release the session runs the full pipeline:
//!
//! 1. drag filter decides click vs pan
//! 2. the click is projected to geographic and plane coordinates
//! 3. the vertex is appended and the progress preview drawn
//! 4. the closure check runs at the viewport's current resolution
//! 5. a closed ring is finalized, registered and the ring reset
//!
//! All mutation happens inside `on_pointer_up`, so appending a vertex and
//! evaluating closure is atomic with respect to other events.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracing::{debug, info, warn};

use crate::closure;
use crate::config::DigitizerConfig;
use crate::coord::{ScreenPoint, Vertex};
use crate::drag::{DragFilter, Gesture};
use crate::polygon::{self, GeometryError, PolygonId, PolygonRegistry};
use crate::projection;
use crate::render::{self, LayerSink};
use crate::ring::InProgressRing;
use crate::viewport::Viewport;

/// What a pointer-up did, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The release ended a pan; nothing was added.
    DragIgnored,
    /// No viewport was available; the event was dropped.
    Ignored,
    /// A vertex was appended at `index`.
    VertexAdded { index: usize, vertex: Vertex },
    /// The ring closed and was registered.
    PolygonCompleted(PolygonId),
    /// The ring closed but is not a valid polygon; the ring is kept for correction.
    FinalizeFailed(GeometryError),
}

/// One user's tracing state: the ring in progress and every finished polygon.
pub struct Session {
    config: DigitizerConfig,
    drag: DragFilter,
    ring: InProgressRing,
    registry: PolygonRegistry,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DigitizerConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: DigitizerConfig) -> Self {
        Self {
            drag: DragFilter::new(config.drag_threshold_px),
            config,
            ring: InProgressRing::new(),
            registry: PolygonRegistry::new(),
        }
    }

    // --- Input events ---

    /// Remember where the pointer went down.
    pub fn on_pointer_down(&mut self, screen: ScreenPoint) {
        self.drag.press(screen);
    }

    /// Handle a release: classify, project, append, and close if possible.
    ///
    /// `viewport` is `None` while the host map is not ready; such releases are
    /// dropped without touching the ring.
    pub fn on_pointer_up(
        &mut self,
        screen: ScreenPoint,
        viewport: Option<&dyn Viewport>,
        sink: &mut dyn LayerSink,
    ) -> Vec<Action> {
        if self.drag.release(screen) == Gesture::Drag {
            debug!(x = screen.x, y = screen.y, "pointer release classified as drag");
            return vec![Action::DragIgnored];
        }

        let (Some(viewport), Some(vertex)) = (viewport, projection::screen_to_vertex(screen, viewport)) else {
            debug!("no viewport; click dropped");
            return vec![Action::Ignored];
        };

        let mut actions = Vec::with_capacity(2);
        let geo = vertex.geographic();
        self.ring.append(vertex);
        debug!(x = screen.x, y = screen.y, lon = geo.lon, lat = geo.lat, count = self.ring.len(), "vertex added");
        actions.push(Action::VertexAdded { index: self.ring.len() - 1, vertex });
        render::draw_progress(&self.ring, sink);

        if closure::is_closed(&self.ring, viewport.resolution(), &self.config.closure) {
            actions.push(self.finish_ring(sink));
        }
        actions
    }

    fn finish_ring(&mut self, sink: &mut dyn LayerSink) -> Action {
        match polygon::finalize(&self.ring) {
            Ok(completed) => {
                let id = completed.id();
                render::draw_polygon(&completed, sink);
                info!(%id, vertices = completed.len(), area = completed.planar_area(), "polygon completed");
                self.registry.push(completed);
                self.ring.clear();
                Action::PolygonCompleted(id)
            }
            Err(e) => {
                warn!(error = %e, vertices = self.ring.len(), "ring closed but polygon is invalid");
                Action::FinalizeFailed(e)
            }
        }
    }

    // --- Lifecycle ---

    /// Discard the ring in progress and every completed polygon.
    pub fn reset(&mut self) {
        self.ring.clear();
        self.registry.clear();
        self.drag = DragFilter::new(self.config.drag_threshold_px);
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &DigitizerConfig {
        &self.config
    }

    /// The ring being traced, for live preview.
    #[must_use]
    pub fn ring(&self) -> &InProgressRing {
        &self.ring
    }

    /// Every polygon completed since the last reset.
    #[must_use]
    pub fn registry(&self) -> &PolygonRegistry {
        &self.registry
    }
}
