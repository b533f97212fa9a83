use log::debug;

use super::filter::{CrossFilter, FilterState};
use crate::data::RecordStore;
use crate::plotting::{BarChart, ChartFrame, ChartRenderer, LineChart, PieChart};
use crate::types::{ChartKind, Selection};

/// The three linked charts over one record store, plus their latest frames.
///
/// Frames are only ever replaced wholesale by a fresh render.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    bar: BarChart,
    line: LineChart,
    pie: PieChart,
    filter: CrossFilter,
    frames: [ChartFrame; 3],
}

fn slot(kind: ChartKind) -> usize {
    match kind {
        ChartKind::Bar => 0,
        ChartKind::Line => 1,
        ChartKind::Pie => 2,
    }
}

impl Dashboard {
    /// Build the charts and render each of them on the full dataset.
    pub fn new(store: RecordStore) -> Self {
        let bar = BarChart::new(&store);
        let line = LineChart::new(&store);
        let pie = PieChart::new();

        let all = store.all();
        let frames = [bar.render(&all), line.render(&all), pie.render(&all)];

        Self {
            store,
            bar,
            line,
            pie,
            filter: CrossFilter::new(),
            frames,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn frame(&self, kind: ChartKind) -> &ChartFrame {
        &self.frames[slot(kind)]
    }

    fn renderer(&self, kind: ChartKind) -> &dyn ChartRenderer {
        match kind {
            ChartKind::Bar => &self.bar,
            ChartKind::Line => &self.line,
            ChartKind::Pie => &self.pie,
        }
    }

    /// Handle a click at surface coordinates `(x, y)` of chart `kind`.
    ///
    /// Returns the charts that were re-rendered; empty when the click did
    /// not land on a bar or point.
    pub fn click(&mut self, kind: ChartKind, x: f64, y: f64) -> Vec<ChartKind> {
        let Some(gender) = self.frame(kind).hit(x, y).map(str::to_owned) else {
            return Vec::new();
        };
        self.select(Selection::new(kind, gender))
    }

    /// Apply a selection and re-render the charts it targets.
    pub fn select(&mut self, selection: Selection) -> Vec<ChartKind> {
        let targets = self.filter.select(selection);
        for kind in &targets {
            self.rerender(*kind);
        }
        targets
    }

    fn rerender(&mut self, kind: ChartKind) {
        let frame = {
            let records = self.filter.subset(&self.store, kind);
            debug!("rendering {} chart from {} records", kind, records.len());
            self.renderer(kind).render(&records)
        };
        self.frames[slot(kind)] = frame;
    }
}
