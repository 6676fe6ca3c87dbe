//! The line chart visual: update lifecycle, validation and host warnings.

use crate::error::{Result, VisualError};
use crate::host::{Visual, VisualHost};
use crate::models::UpdateOptions;
use crate::points::PointSet;
use crate::render::{ChartRenderer, Layout, Surface};
use crate::settings::{VisualObjectInstance, VisualSettings};

/// What an update ended up drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The chart was drawn with this many points.
    Rendered { points: usize },
    /// The input could not be plotted; the surface holds an empty frame.
    Empty { reason: String },
}

/// A mounted line chart. Owns its surface; the host drives it through [`Visual`].
pub struct LineChartVisual<H: VisualHost> {
    host: H,
    renderer: ChartRenderer,
    surface: Surface,
    settings: VisualSettings,
}

impl<H: VisualHost> LineChartVisual<H> {
    pub fn new(host: H) -> Self {
        Self::with_layout(host, Layout::default())
    }

    pub fn with_layout(host: H, layout: Layout) -> Self {
        Self {
            host,
            renderer: ChartRenderer::new(layout),
            surface: Surface::default(),
            settings: VisualSettings::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Settings applied by the last update; defaults before the first one.
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    pub fn layout(&self) -> &Layout {
        self.renderer.layout()
    }

    pub fn render_svg(&self) -> Result<String> {
        self.surface.to_svg(self.renderer.layout())
    }

    fn warn(&mut self, err: &VisualError) {
        log::warn!("{}: {}", err.title(), err);
        self.host.display_warning_icon(err.title(), &err.to_string());
    }
}

impl<H: VisualHost> Visual for LineChartVisual<H> {
    fn update(&mut self, options: &UpdateOptions) -> UpdateOutcome {
        let (width, height) = options.viewport.pixels();
        self.surface.resize(width, height);

        let view = options.data_view();
        self.settings = match VisualSettings::parse(view) {
            Ok(settings) => settings,
            Err(e) => {
                self.warn(&e);
                VisualSettings::default()
            }
        };

        let points = match view
            .ok_or(VisualError::NoDataView)
            .and_then(PointSet::from_data_view)
        {
            Ok(points) => points,
            Err(e) => {
                self.surface.clear();
                self.warn(&e);
                return UpdateOutcome::Empty {
                    reason: e.to_string(),
                };
            }
        };

        if points.dropped() > 0 {
            let detail = format!(
                "axis and values columns differ in length; {} unmatched rows were not plotted",
                points.dropped()
            );
            log::warn!("{detail}");
            self.host.display_warning_icon("Column length mismatch", &detail);
        }

        self.renderer.render(&mut self.surface, &points, &self.settings);
        UpdateOutcome::Rendered {
            points: points.len(),
        }
    }

    fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        self.settings.enumerate_object_instances(object_name)
    }

    fn to_svg(&self) -> Result<String> {
        self.render_svg()
    }
}
