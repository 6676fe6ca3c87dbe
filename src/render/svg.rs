//! SVG output through plotters.

use super::surface::{AxisLayer, AxisOrientation, Surface};
use super::types::Layout;
use crate::error::{Result, VisualError};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::fmt::Debug;

/// The SVG backend writes `font-size` as the requested size divided by this.
const SVG_FONT_SCALE: f64 = 1.24;

/// Render `surface` into an in-memory SVG document.
pub fn to_svg(surface: &Surface, layout: &Layout) -> Result<String> {
    let mut buf = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buf, (surface.width, surface.height)).into_drawing_area();
        draw_surface(&root, surface, layout)?;
        root.present().map_err(render_err)?;
    }
    Ok(buf)
}

/// Draw all layers onto any Plotters backend, back to front.
pub fn draw_surface<DB>(
    root: &DrawingArea<DB, Shift>,
    surface: &Surface,
    layout: &Layout,
) -> Result<()>
where
    DB: DrawingBackend,
{
    if let Some(bg) = layout.background {
        root.fill(&RGBColor::from(bg)).map_err(render_err)?;
    }

    let grid = RGBColor::from(layout.gridline_color).stroke_width(1);
    for g in &surface.gridlines {
        root.draw(&PathElement::new(vec![px((g.x0, g.y)), px((g.x1, g.y))], grid))
            .map_err(render_err)?;
    }

    if let Some(line) = &surface.line {
        let points: Vec<(i32, i32)> = line.points.iter().copied().map(px).collect();
        let stroke = RGBColor::from(line.stroke).stroke_width(line.stroke_width);
        root.draw(&PathElement::new(points, stroke)).map_err(render_err)?;
    }

    for axis in [&surface.x_axis, &surface.y_axis].into_iter().flatten() {
        draw_axis(root, axis, layout)?;
    }

    for m in surface.visible_markers() {
        let fill = RGBColor::from(m.fill).filled();
        root.draw(&Circle::new(px((m.cx, m.cy)), m.radius, fill))
            .map_err(render_err)?;
    }
    Ok(())
}

fn draw_axis<DB>(root: &DrawingArea<DB, Shift>, axis: &AxisLayer, layout: &Layout) -> Result<()>
where
    DB: DrawingBackend,
{
    let color = RGBColor::from(layout.axis_color);
    let stroke = color.stroke_width(1);
    let domain: Vec<(i32, i32)> = axis.domain.iter().copied().map(px).collect();
    root.draw(&PathElement::new(domain, stroke)).map_err(render_err)?;

    let font = (layout.font_family.as_str(), layout.font_px * SVG_FONT_SCALE)
        .into_font()
        .color(&color);
    let (size, pad, anchor) = (layout.tick_size, layout.tick_padding, axis.anchor);

    for tick in &axis.ticks {
        let p = tick.position;
        let (mark, label_at, pos) = match axis.orientation {
            AxisOrientation::Left => (
                [(anchor - size, p), (anchor, p)],
                (anchor - size - pad, p),
                Pos::new(HPos::Right, VPos::Center),
            ),
            AxisOrientation::Bottom => (
                [(p, anchor), (p, anchor + size)],
                (p, anchor + size + pad),
                Pos::new(HPos::Center, VPos::Top),
            ),
        };
        root.draw(&PathElement::new(vec![px(mark[0]), px(mark[1])], stroke))
            .map_err(render_err)?;
        root.draw(&Text::new(tick.label.clone(), px(label_at), font.pos(pos)))
            .map_err(render_err)?;
    }
    Ok(())
}

fn px((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn render_err<E: Debug>(e: E) -> VisualError {
    VisualError::Render(format!("{:?}", e))
}
