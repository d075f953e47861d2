//! Polygon digitization engine for interactive maps.
//!
//! The host map widget forwards raw pointer events to a [`session::Session`].
//! The session separates clicks from pan drags, projects each click into
//! geographic and spherical-mercator coordinates, accumulates the vertices of
//! the polygon being traced, and finalizes the ring once the user clicks back
//! near its start. Drawing is delegated to the host through the
//! [`render::LayerSink`] trait; this crate owns no rendering state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Pointer-event state machine tying everything together |
//! | [`coord`] | Screen, geographic and projected coordinate types |
//! | [`viewport`] | Map viewport (screen to plane transform, resolution) |
//! | [`projection`] | Spherical mercator forward/inverse projection |
//! | [`drag`] | Click-vs-drag discrimination |
//! | [`ring`] | In-progress vertex chain |
//! | [`closure`] | Resolution-adaptive ring closure check |
//! | [`polygon`] | Finalized polygons and the session registry |
//! | [`render`] | Preview layers pushed to the host map |
//! | [`navigation`] | Start-view camera fly-to animation |
//! | [`config`] | Tunable thresholds, overridable from the environment |
//! | [`consts`] | Shared numeric constants |

pub mod closure;
pub mod config;
pub mod consts;
pub mod coord;
pub mod drag;
pub mod navigation;
pub mod polygon;
pub mod projection;
pub mod render;
pub mod ring;
pub mod session;
pub mod viewport;
