//! Chart rendering: turn a sorted point set into surface layers.
//!
//! - Horizontal scale `[min category, max category] -> [padding, width - padding - offset]`,
//!   every x shifted right by the axis offset
//! - Vertical scale `[min value, max value] -> [height - padding, offset]` (larger is higher)
//! - Gridlines and y ticks at `range(min, max, (max - min) / 2 - 1)`
//! - x-axis with nice ticks, one marker per row, a single stroked path

pub mod surface;
pub mod svg;
pub mod text;
pub mod types;

pub use surface::{AxisLayer, AxisOrientation, Gridline, LinePath, Marker, Surface, Tick};
pub use types::Layout;

use crate::points::{CategoryKind, Extent, PointSet};
use crate::scale::{self, LinearScale};
use crate::settings::VisualSettings;

use text::{format_date, format_general, format_integer};

/// Draws the line chart onto a [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    layout: Layout,
}

impl ChartRenderer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Category to horizontal pixel, before the axis offset is applied.
    pub fn x_scale(&self, extent: &Extent, width: f64) -> LinearScale {
        let l = &self.layout;
        LinearScale::new(
            (extent.min_category, extent.max_category),
            (l.axis_padding, width - (l.axis_padding + l.axis_offset)),
        )
    }

    /// Value to vertical pixel.
    pub fn y_scale(&self, extent: &Extent, height: f64) -> LinearScale {
        let l = &self.layout;
        LinearScale::new(
            (extent.min_value, extent.max_value),
            (height - l.axis_padding, l.axis_offset),
        )
    }

    /// Redraw every layer for `points`. The surface must already carry the viewport size.
    pub fn render(&self, surface: &mut Surface, points: &PointSet, settings: &VisualSettings) {
        surface.clear();
        let Some(extent) = points.extent() else {
            return;
        };
        let l = &self.layout;
        let (width, height) = (surface.width as f64, surface.height as f64);
        let x = self.x_scale(&extent, width);
        let y = self.y_scale(&extent, height);
        let shift = l.axis_offset;

        let value_ticks = scale::value_ticks(extent.min_value, extent.max_value);
        surface.gridlines = value_ticks
            .iter()
            .map(|&v| Gridline {
                value: v,
                y: y.apply(v),
                x0: shift,
                x1: shift + (width - l.gridline_inset),
            })
            .collect();

        let (y0, y1) = y.range();
        surface.y_axis = Some(AxisLayer {
            orientation: AxisOrientation::Left,
            anchor: shift,
            domain: vec![
                (shift - l.tick_size, y0),
                (shift, y0),
                (shift, y1),
                (shift - l.tick_size, y1),
            ],
            ticks: value_ticks
                .iter()
                .map(|&v| Tick {
                    value: v,
                    position: y.apply(v),
                    label: format_integer(v),
                })
                .collect(),
        });

        let base = height - shift;
        let (x0, x1) = x.range();
        let label: fn(f64) -> String = match points.kind() {
            CategoryKind::Temporal => format_date,
            CategoryKind::Numeric => format_general,
        };
        surface.x_axis = Some(AxisLayer {
            orientation: AxisOrientation::Bottom,
            anchor: base,
            domain: vec![
                (x0 + shift, base + l.tick_size),
                (x0 + shift, base),
                (x1 + shift, base),
                (x1 + shift, base + l.tick_size),
            ],
            ticks: x
                .ticks(l.x_tick_count)
                .into_iter()
                .map(|v| Tick {
                    value: v,
                    position: x.apply(v) + shift,
                    label: label(v),
                })
                .collect(),
        });

        let coords: Vec<(f64, f64)> = points
            .rows()
            .iter()
            .map(|r| (x.apply(r.x) + shift, y.apply(r.value)))
            .collect();

        let dp = &settings.data_point;
        surface.markers = coords
            .iter()
            .map(|&(cx, cy)| Marker {
                cx,
                cy,
                radius: l.marker_radius,
                fill: dp.default_color,
                visible: dp.show_all_data_points,
            })
            .collect();

        surface.line = Some(LinePath {
            points: coords,
            stroke: settings.line.line_color,
            stroke_width: l.line_width,
        });

        log::debug!(
            "rendered {} points into {}x{} ({} gridlines, {} x ticks)",
            points.len(),
            surface.width,
            surface.height,
            surface.gridlines.len(),
            surface.x_axis.as_ref().map_or(0, |a| a.ticks.len())
        );
    }
}
