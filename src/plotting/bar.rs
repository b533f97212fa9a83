use super::axis::{axis_labels, band_axis, left_axis};
use super::frame::{ChartFrame, Mark};
use super::scale::{BandScale, LinearScale};
use super::styles::{series_color, ChartStyle, ChartTheme};
use super::ChartRenderer;
use crate::data::{Domains, RecordStore};
use crate::types::{ChartKind, PurchaseRecord};
use crate::utils::{group_by, mean};

/// Average purchase amount of one gender.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub gender: String,
    pub mean_purchase: f64,
}

/// Bar chart of average purchase amount by gender.
///
/// Both scales are fixed when the chart is built from the full dataset, so
/// filtered renders stay comparable with the unfiltered one.
#[derive(Debug, Clone)]
pub struct BarChart {
    x: BandScale,
    y: LinearScale,
    domains: Domains,
    style: ChartStyle,
    theme: ChartTheme,
}

impl BarChart {
    pub fn new(store: &RecordStore) -> Self {
        Self::with_style(store, ChartStyle::default(), ChartTheme::default())
    }

    pub fn with_style(store: &RecordStore, style: ChartStyle, theme: ChartTheme) -> Self {
        let domains = store.domains().clone();
        let x = BandScale::new(
            domains.genders.clone(),
            (style.plot_left, style.plot_right),
            style.band_padding,
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

    /// Vertical domain, fixed for the lifetime of the chart.
    pub fn y_domain(&self) -> (f64, f64) {
        self.y.domain()
    }

    /// One bar per gender present in `records`, in first-occurrence order.
    /// Genders without a numeric amount produce no bar.
    pub fn bars(&self, records: &[&PurchaseRecord]) -> Vec<Bar> {
        group_by(records, |r| r.gender.clone())
            .into_iter()
            .filter_map(|(gender, members)| {
                mean(&members, |r| r.purchase_amount).map(|mean_purchase| Bar {
                    gender,
                    mean_purchase,
                })
            })
            .collect()
    }
}

impl ChartRenderer for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn render(&self, records: &[&PurchaseRecord]) -> ChartFrame {
        let style = &self.style;
        let mut frame = ChartFrame::new(self.kind(), style.width, style.height);

        for bar in self.bars(records) {
            let Some(x) = self.x.map(&bar.gender) else {
                continue;
            };
            let top = self.y.map(bar.mean_purchase);
            let color = series_color(self.domains.gender_index(&bar.gender).unwrap_or(0));

            frame.push_with_datum(
                Mark::Rect {
                    x,
                    y: top,
                    width: self.x.bandwidth(),
                    height: (style.plot_bottom - top).max(0.0),
                    fill: color,
                },
                bar.gender,
            );
        }

        band_axis(
            &mut frame,
            &self.x,
            (style.plot_left, style.plot_right),
            style.plot_bottom,
            style,
            &self.theme,
        );
        left_axis(&mut frame, &self.y, style.plot_left, style, &self.theme);
        axis_labels(
            &mut frame,
            ChartKind::Bar.title(),
            "Gender",
            "Purchase Amount",
            style,
            &self.theme,
        );

        frame
    }
}
