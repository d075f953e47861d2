//! Preview rendering: turns ring and polygon state into map layers.
//!
//! The host map engine does the actual drawing. This module only decides
//! which features to show and how they are styled, then hands them to a
//! [`LayerSink`]. It reads digitizer state and never mutates it.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::SYMBOL_SCALE;
use crate::coord::ProjectedCoordinate;
use crate::polygon::CompletedPolygon;
use crate::ring::InProgressRing;

/// Layer holding the marker on the first vertex.
pub const START_MARKER_LAYER: &str = "Starting point feature";

/// Layer holding the newest edge of the ring.
pub const SEGMENT_LAYER: &str = "Layer";

/// Layer holding a completed polygon.
pub const POLYGON_LAYER: &str = "Polygon layer";

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Self = Self::rgba(255, 0, 0, 255);

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// How a layer's features are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    /// Filled area with an outline; also used for lines.
    Vector { fill: Color, outline: Color, outline_width: f64 },
    /// Point symbol.
    Symbol { scale: f64, fill: Color, outline: Color, outline_width: f64 },
}

impl Style {
    /// Translucent red fill with a solid 2 px red outline.
    #[must_use]
    pub fn trace() -> Self {
        Self::Vector { fill: Color::rgba(255, 0, 0, 18), outline: Color::RED, outline_width: 2.0 }
    }

    /// Solid red marker sized to match the closure target.
    #[must_use]
    pub fn start_marker() -> Self {
        Self::Symbol { scale: SYMBOL_SCALE, fill: Color::RED, outline: Color::RED, outline_width: 1.0 }
    }
}

/// A drawable feature in plane coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Point(ProjectedCoordinate),
    Line(Vec<ProjectedCoordinate>),
    Polygon(Vec<ProjectedCoordinate>),
}

/// Receives layers the digitizer wants drawn.
pub trait LayerSink {
    fn add_layer(&mut self, name: &str, features: Vec<Feature>, style: Style);
}

/// One layer captured by [`LayerLog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub features: Vec<Feature>,
    pub style: Style,
}

/// A sink that just records layers in order.
#[derive(Debug, Clone, Default)]
pub struct LayerLog {
    pub layers: Vec<Layer>,
}

impl LayerLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers with the given name, oldest first.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Layer> + 'a {
        self.layers.iter().filter(move |l| l.name == name)
    }
}

impl LayerSink for LayerLog {
    fn add_layer(&mut self, name: &str, features: Vec<Feature>, style: Style) {
        self.layers.push(Layer { name: name.to_owned(), features, style });
    }
}

/// Show the latest progress: the start marker for a lone vertex, otherwise
/// the segment that was just added. Does nothing for an empty ring.
pub fn draw_progress(ring: &InProgressRing, sink: &mut dyn LayerSink) {
    if let Some((a, b)) = ring.last_segment() {
        sink.add_layer(SEGMENT_LAYER, vec![Feature::Line(vec![a.projected(), b.projected()])], Style::trace());
        return;
    }
    if let Some(first) = ring.first() {
        sink.add_layer(START_MARKER_LAYER, vec![Feature::Point(first.projected())], Style::start_marker());
    }
}

/// Show a completed polygon.
pub fn draw_polygon(polygon: &CompletedPolygon, sink: &mut dyn LayerSink) {
    sink.add_layer(POLYGON_LAYER, vec![Feature::Polygon(polygon.projected().collect())], Style::trace());
}
