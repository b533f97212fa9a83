use log::{debug, warn};
use std::collections::HashMap;

use crate::data::RecordStore;
use crate::types::{ChartKind, PurchaseRecord, Selection};

/// Which subset the dashboard is currently linked to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Initial state: every chart shows the full dataset
    #[default]
    Unfiltered,
    /// A bar or point was clicked; the other charts show that gender
    Filtered(Selection),
}

/// Cross-filter controller linking the three charts.
///
/// A selection from one chart re-targets the two other charts at the
/// records matching it. The originating chart keeps whatever it showed.
/// Each selection replaces the previous predicate; selections never stack.
#[derive(Debug, Clone, Default)]
pub struct CrossFilter {
    state: FilterState,
    chart_filters: HashMap<ChartKind, Selection>,
}

impl CrossFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply a selection, returning the charts that must re-render.
    ///
    /// The pie chart is never a filter source; selections claiming to come
    /// from it are ignored.
    pub fn select(&mut self, selection: Selection) -> Vec<ChartKind> {
        if selection.source == ChartKind::Pie {
            warn!("ignoring selection from the pie chart");
            return Vec::new();
        }

        let targets: Vec<ChartKind> = ChartKind::ALL
            .into_iter()
            .filter(|kind| *kind != selection.source)
            .collect();
        for kind in &targets {
            self.chart_filters.insert(*kind, selection.clone());
        }

        debug!(
            "selected gender `{}` from the {} chart, re-rendering {:?}",
            selection.gender, selection.source, targets
        );
        self.state = FilterState::Filtered(selection);
        targets
    }

    /// The selection a chart is currently rendered with, if any.
    pub fn filter_for(&self, kind: ChartKind) -> Option<&Selection> {
        self.chart_filters.get(&kind)
    }

    /// The records `kind` should render, recomputed from the full store.
    pub fn subset<'a>(&self, store: &'a RecordStore, kind: ChartKind) -> Vec<&'a PurchaseRecord> {
        match self.filter_for(kind) {
            Some(selection) => store.filter(selection),
            None => store.all(),
        }
    }
}
