//! Retained drawing surface.
//!
//! The surface keeps every layer in absolute pixel coordinates so a redraw can
//! be inspected before it is serialized. Hidden markers stay in the scene with
//! their positions; only the SVG output skips them.

use super::svg;
use super::types::Layout;
use crate::error::Result;
use crate::style::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Vertical axis with ticks and labels to its left.
    Left,
    /// Horizontal axis with ticks and labels below it.
    Bottom,
}

/// A labelled mark at `position` pixels along its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayer {
    pub orientation: AxisOrientation,
    /// Fixed coordinate of the axis line: x for `Left`, y for `Bottom`.
    pub anchor: f64,
    /// Axis line including its outer ticks.
    pub domain: Vec<(f64, f64)>,
    pub ticks: Vec<Tick>,
}

/// Horizontal reference line at a value tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub value: f64,
    pub y: f64,
    pub x0: f64,
    pub x1: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub points: Vec<(f64, f64)>,
    pub stroke: Rgb,
    pub stroke_width: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: u32,
    pub fill: Rgb,
    pub visible: bool,
}

/// The canvas a visual owns: size plus the gridline, path, axis and marker layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub gridlines: Vec<Gridline>,
    pub line: Option<LinePath>,
    pub x_axis: Option<AxisLayer>,
    pub y_axis: Option<AxisLayer>,
    pub markers: Vec<Marker>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Drop every layer, keeping the size. What is left is the empty frame.
    pub fn clear(&mut self) {
        self.gridlines.clear();
        self.line = None;
        self.x_axis = None;
        self.y_axis = None;
        self.markers.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.gridlines.is_empty()
            && self.line.is_none()
            && self.x_axis.is_none()
            && self.y_axis.is_none()
            && self.markers.is_empty()
    }

    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.visible)
    }

    /// Serialize the surface as an SVG document.
    pub fn to_svg(&self, layout: &Layout) -> Result<String> {
        svg::to_svg(self, layout)
    }
}
