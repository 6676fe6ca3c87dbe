//! Layout constants for the chart.

use crate::style::Rgb;

/// Geometry and styling the renderer draws with.
///
/// Defaults reproduce the shipped look: a 30px axis offset, 60px padding
/// between the plot and the viewport edges, 3 x-axis ticks, radius-4 markers
/// and a 3px line.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Padding between the viewport edges and the scale ranges.
    pub axis_padding: f64,
    /// Distance of the y-axis from the left edge and of the x-axis from the bottom edge.
    pub axis_offset: f64,
    pub tick_size: f64,
    pub tick_padding: f64,
    /// Requested x-axis tick count; the actual count follows the nice step.
    pub x_tick_count: usize,
    /// Gridlines span the viewport width minus this inset.
    pub gridline_inset: f64,
    pub font_family: String,
    /// Tick label size as written to the SVG `font-size` attribute.
    pub font_px: f64,
    pub marker_radius: u32,
    pub line_width: u32,
    pub gridline_color: Rgb,
    pub axis_color: Rgb,
    /// `None` leaves the surface transparent.
    pub background: Option<Rgb>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            axis_padding: 60.0,
            axis_offset: 30.0,
            tick_size: 6.0,
            tick_padding: 3.0,
            x_tick_count: 3,
            gridline_inset: 50.0,
            font_family: "sans-serif".to_string(),
            font_px: 10.0,
            marker_radius: 4,
            line_width: 3,
            gridline_color: Rgb::new(0xD3, 0xD3, 0xD3),
            axis_color: Rgb::BLACK,
            background: None,
        }
    }
}
