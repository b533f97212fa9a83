use std::f64::consts::{FRAC_PI_2, TAU};

use super::frame::{ChartFrame, HAnchor, Mark, VAnchor};
use super::styles::{category_color, ChartStyle, ChartTheme};
use super::ChartRenderer;
use crate::types::{ChartKind, PurchaseRecord};
use crate::utils::{count, group_by};

/// Share of one payment method within the rendered records.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub payment_method: String,
    pub count: usize,
    /// `count` relative to the rendered records, in `[0, 1]`
    pub fraction: f64,
    /// Radians clockwise from 12 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    /// Percentage label with one decimal, e.g. `"50.0%"`. Halves round up,
    /// so 1 in 16 reads `"6.3%"`.
    pub fn label(&self) -> String {
        format!("{:.1}%", (self.fraction * 1000.0).round() / 10.0)
    }
}

/// Pie chart of payment-method distribution.
///
/// Unlike the bar and line charts, shares are relative to whatever subset is
/// rendered, so slices always cover the full circle.
#[derive(Debug, Clone, Default)]
pub struct PieChart {
    style: ChartStyle,
    theme: ChartTheme,
}

impl PieChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ChartStyle, theme: ChartTheme) -> Self {
        Self { style, theme }
    }

    /// Slices in first-occurrence order of their payment method.
    ///
    /// Angles are laid out clockwise from 12 o'clock in descending count
    /// order; ties keep group order. Empty input yields no slices.
    pub fn slices(&self, records: &[&PurchaseRecord]) -> Vec<Slice> {
        let total = count(records);
        if total == 0 {
            return Vec::new();
        }

        let mut slices: Vec<Slice> = group_by(records, |r| r.payment_method.clone())
            .into_iter()
            .map(|(payment_method, members)| {
                let n = count(&members);
                Slice {
                    payment_method,
                    count: n,
                    fraction: n as f64 / total as f64,
                    start_angle: 0.0,
                    end_angle: 0.0,
                }
            })
            .collect();

        let mut order: Vec<usize> = (0..slices.len()).collect();
        order.sort_by(|a, b| slices[*b].count.cmp(&slices[*a].count));

        let mut angle = 0.0;
        for (position, &index) in order.iter().enumerate() {
            let slice = &mut slices[index];
            slice.start_angle = angle;
            angle = if position + 1 == order.len() {
                TAU
            } else {
                angle + slice.fraction * TAU
            };
            slice.end_angle = angle;
        }

        slices
    }
}

impl ChartRenderer for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(&self, records: &[&PurchaseRecord]) -> ChartFrame {
        let style = &self.style;
        let (cx, cy) = style.center();
        let mut frame = ChartFrame::new(self.kind(), style.width, style.height);

        for (index, slice) in self.slices(records).iter().enumerate() {
            frame.push(Mark::Wedge {
                cx,
                cy,
                inner_radius: 0.0,
                outer_radius: style.pie_radius,
                start_angle: slice.start_angle,
                end_angle: slice.end_angle,
                fill: category_color(index),
            });

            // centroid of the wedge, halfway out along its bisector
            let mid = (slice.start_angle + slice.end_angle) / 2.0 - FRAC_PI_2;
            let r = style.pie_radius / 2.0;
            frame.push(Mark::Text {
                x: cx + mid.cos() * r,
                y: cy + mid.sin() * r,
                content: slice.label(),
                font_size: style.pie_font_size,
                color: self.theme.text_color,
                h_anchor: HAnchor::Middle,
                v_anchor: VAnchor::Middle,
                vertical: false,
            });
        }

        frame.push(Mark::Text {
            x: cx,
            y: cy - style.pie_radius - 30.0,
            content: ChartKind::Pie.title().to_string(),
            font_size: style.title_font_size,
            color: self.theme.text_color,
            h_anchor: HAnchor::Middle,
            v_anchor: VAnchor::Bottom,
            vertical: false,
        });

        frame
    }
}
