//! linechart
//!
//! A line chart visual for a host analytics application. The host hands over a
//! categorical table, a viewport and persisted formatting objects; the visual
//! redraws an SVG chart with gridlines, axes, a connecting line and markers.
//!
//! ### Features
//! - Rows sorted by category (numbers, dates, or numeric text) before plotting
//! - Linear scales from the observed min/max of both columns
//! - Typed formatting settings: marker color and visibility, line color
//! - Invalid or empty input renders an empty frame and raises a host warning
//! - Explicit plugin registration against a host-provided registry
//!
//! ### Example
//! ```
//! use linechart::{DataView, LineChartVisual, UpdateOptions, Viewport, Visual, VisualHost};
//!
//! struct Console;
//! impl VisualHost for Console {
//!     fn display_warning_icon(&mut self, title: &str, detail: &str) {
//!         eprintln!("{title}: {detail}");
//!     }
//! }
//!
//! let mut visual = LineChartVisual::new(Console);
//! let view = DataView::categorical([2019, 2018, 2020], [10, 5, 20]);
//! visual.update(&UpdateOptions::new(view, Viewport::new(640.0, 400.0)));
//! assert_eq!(visual.surface().markers.len(), 3);
//! let svg = visual.render_svg()?;
//! assert!(svg.contains("<circle"));
//! # Ok::<(), linechart::VisualError>(())
//! ```

pub mod capabilities;
pub mod error;
pub mod host;
pub mod models;
pub mod points;
pub mod render;
pub mod scale;
pub mod settings;
pub mod style;
pub mod visual;

pub use error::VisualError;
pub use host::{
    ConstructorOptions, PluginRegistry, Plugins, Visual, VisualHost, VisualPlugin, register,
};
pub use models::{DataView, PrimitiveValue, UpdateOptions, Viewport};
pub use points::{Category, PointSet, Row};
pub use settings::VisualSettings;
pub use visual::{LineChartVisual, UpdateOutcome};
