use super::axis::{axis_labels, bottom_axis, left_axis};
use super::frame::{ChartFrame, Mark};
use super::scale::LinearScale;
use super::styles::{series_color, ChartStyle, ChartTheme};
use super::ChartRenderer;
use crate::data::{Domains, RecordStore};
use crate::types::{ChartKind, PurchaseRecord};
use crate::utils::{group_by2, mean};

/// Average purchase amount per family size for one gender.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub gender: String,
    /// `(family size, mean purchase)` sorted by family size
    pub points: Vec<(u32, f64)>,
}

/// Multi-line chart of average purchase amount by family size, one line per
/// gender.
#[derive(Debug, Clone)]
pub struct LineChart {
    x: LinearScale,
    y: LinearScale,
    domains: Domains,
    style: ChartStyle,
    theme: ChartTheme,
}

impl LineChart {
    pub fn new(store: &RecordStore) -> Self {
        Self::with_style(store, ChartStyle::default(), ChartTheme::default())
    }

    pub fn with_style(store: &RecordStore, style: ChartStyle, theme: ChartTheme) -> Self {
        let domains = store.domains().clone();
        let x = LinearScale::new(
            (0.0, domains.max_family_size.unwrap_or(0) as f64),
            (style.plot_left, style.plot_right),
        );
        let y = LinearScale::new(
            (0.0, domains.max_purchase_amount.unwrap_or(0.0)),
            (style.plot_bottom, style.plot_top),
        );

        Self {
            x,
            y,
            domains,
            style,
            theme,
        }
    }

    pub fn x_domain(&self) -> (f64, f64) {
        self.x.domain()
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y.domain()
    }

    /// One series per gender in `records`. Records without a family size and
    /// buckets without a numeric amount contribute no point.
    pub fn series(&self, records: &[&PurchaseRecord]) -> Vec<Series> {
        group_by2(records, |r| r.gender.clone(), |r| r.family_size)
            .into_iter()
            .map(|(gender, buckets)| {
                let mut points: Vec<(u32, f64)> = buckets
                    .into_iter()
                    .filter_map(|(family_size, members)| {
                        Some((family_size?, mean(&members, |r| r.purchase_amount)?))
                    })
                    .collect();
                points.sort_by_key(|(family_size, _)| *family_size);
                Series { gender, points }
            })
            .filter(|series| !series.points.is_empty())
            .collect()
    }
}

impl ChartRenderer for LineChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn render(&self, records: &[&PurchaseRecord]) -> ChartFrame {
        let style = &self.style;
        let mut frame = ChartFrame::new(self.kind(), style.width, style.height);

        bottom_axis(&mut frame, &self.x, style.plot_bottom, style, &self.theme);
        left_axis(&mut frame, &self.y, style.plot_left, style, &self.theme);
        axis_labels(
            &mut frame,
            ChartKind::Line.title(),
            "Family Size",
            "Purchase Amount",
            style,
            &self.theme,
        );

        for series in self.series(records) {
            let color = series_color(self.domains.gender_index(&series.gender).unwrap_or(0));
            let positions: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|(family_size, mean_purchase)| {
                    (self.x.map(*family_size as f64), self.y.map(*mean_purchase))
                })
                .collect();

            if positions.len() > 1 {
                frame.push(Mark::Polyline {
                    points: positions.clone(),
                    stroke: color,
                    stroke_width: style.line_width,
                });
            }
            for (cx, cy) in positions {
                frame.push_with_datum(
                    Mark::Circle {
                        cx,
                        cy,
                        radius: style.point_radius,
                        fill: color,
                    },
                    series.gender.clone(),
                );
            }
        }

        frame
    }
}
