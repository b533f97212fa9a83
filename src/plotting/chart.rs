use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::FontTransform;

use super::frame::{ChartFrame, HAnchor, Mark, VAnchor};
use super::styles::{ChartTheme, Color as FrameColor};
use crate::error::{DashboardError, Result};

/// Angular resolution used to approximate pie arcs with polygons.
const ARC_STEP: f64 = std::f64::consts::PI / 90.0;

fn rgb(color: FrameColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn px((x, y): (f64, f64)) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

/// Paint `frame` onto any plotters drawing area, replacing its contents.
pub fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &ChartFrame,
    theme: &ChartTheme,
) -> Result<()> {
    area.fill(&rgb(theme.background_color))
        .map_err(DashboardError::plot)?;

    for mark in frame.marks() {
        draw_mark(area, mark).map_err(DashboardError::plot)?;
    }
    Ok(())
}

fn draw_mark<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    mark: &Mark,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    match mark {
        Mark::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => area.draw(&Rectangle::new(
            [px((*x, *y)), px((x + width, y + height))],
            rgb(*fill).filled(),
        )),
        Mark::Circle {
            cx,
            cy,
            radius,
            fill,
        } => area.draw(&Circle::new(
            px((*cx, *cy)),
            radius.round() as i32,
            rgb(*fill).filled(),
        )),
        Mark::Polyline {
            points,
            stroke,
            stroke_width,
        } => area.draw(&PathElement::new(
            points.iter().copied().map(px).collect::<Vec<_>>(),
            rgb(*stroke).stroke_width(stroke_width.round() as u32),
        )),
        Mark::Line { from, to, stroke } => area.draw(&PathElement::new(
            vec![px(*from), px(*to)],
            rgb(*stroke).stroke_width(1),
        )),
        Mark::Wedge {
            cx,
            cy,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill,
        } => area.draw(&Polygon::new(
            wedge_outline(
                (*cx, *cy),
                *inner_radius,
                *outer_radius,
                *start_angle,
                *end_angle,
            ),
            rgb(*fill).filled(),
        )),
        Mark::Text {
            x,
            y,
            content,
            font_size,
            color,
            h_anchor,
            v_anchor,
            vertical,
        } => {
            let h = match h_anchor {
                HAnchor::Start => HPos::Left,
                HAnchor::Middle => HPos::Center,
                HAnchor::End => HPos::Right,
            };
            let v = match v_anchor {
                VAnchor::Top => VPos::Top,
                VAnchor::Middle => VPos::Center,
                VAnchor::Bottom => VPos::Bottom,
            };
            let mut style = ("sans-serif", *font_size)
                .into_font()
                .color(&rgb(*color))
                .pos(Pos::new(h, v));
            if *vertical {
                style = style.transform(FontTransform::Rotate270);
            }
            area.draw(&Text::new(content.as_str(), px((*x, *y)), style))
        }
    }
}

/// Polygon approximating an annular sector; a zero inner radius closes the
/// shape at the center.
fn wedge_outline(
    center: (f64, f64),
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Vec<(i32, i32)> {
    let steps = (((end_angle - start_angle) / ARC_STEP).ceil() as usize).max(1);
    let at = |radius: f64, angle: f64| {
        px((
            center.0 + radius * angle.sin(),
            center.1 - radius * angle.cos(),
        ))
    };

    let mut outline: Vec<(i32, i32)> = (0..=steps)
        .map(|i| {
            let angle = start_angle + (end_angle - start_angle) * i as f64 / steps as f64;
            at(outer_radius, angle)
        })
        .collect();

    if inner_radius > 0.0 {
        outline.extend((0..=steps).rev().map(|i| {
            let angle = start_angle + (end_angle - start_angle) * i as f64 / steps as f64;
            at(inner_radius, angle)
        }));
    } else {
        outline.push(px(center));
    }
    outline
}

/// Render `frame` as an SVG document.
pub fn render_svg(frame: &ChartFrame, theme: &ChartTheme) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (frame.width, frame.height))
            .into_drawing_area();
        paint(&root, frame, theme)?;
        root.present().map_err(DashboardError::plot)?;
    }
    Ok(svg)
}

/// Render `frame` into a packed RGB pixel buffer of `width * height * 3`
/// bytes.
pub fn render_rgb(frame: &ChartFrame, theme: &ChartTheme) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; frame.width as usize * frame.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (frame.width, frame.height))
            .into_drawing_area();
        paint(&root, frame, theme)?;
        root.present().map_err(DashboardError::plot)?;
    }
    Ok(buffer)
}
