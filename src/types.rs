//! # Common Types
//!
//! This module contains the common types used throughout the dashboard for
//! representing purchase records, the charts that display them and the
//! selections that link those charts together.

use std::fmt;

/// One row of the purchase dataset.
///
/// Records are parsed once at startup and never mutated afterwards. Numeric
/// cells that fail to parse are kept rather than rejected: a malformed
/// purchase amount becomes `NaN` and a malformed family size becomes `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    /// Customer gender, used as a categorical key
    pub gender: String,
    /// Number of people in the customer's household
    pub family_size: Option<u32>,
    /// Amount spent on the purchase
    pub purchase_amount: f64,
    /// How the purchase was paid for, used as a categorical key
    pub payment_method: String,
}

impl PurchaseRecord {
    pub fn new(
        gender: impl Into<String>,
        family_size: u32,
        purchase_amount: f64,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            gender: gender.into(),
            family_size: Some(family_size),
            purchase_amount,
            payment_method: payment_method.into(),
        }
    }
}

/// The three linked charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Average Purchase by Gender",
            ChartKind::Line => "Average Purchase by Family Size and Gender",
            ChartKind::Pie => "Payment Methods Distribution",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// A click on a chart mark, carrying the gender bound to that mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The chart the click originated from
    pub source: ChartKind,
    /// The gender key bound to the clicked bar or point
    pub gender: String,
}

impl Selection {
    pub fn new(source: ChartKind, gender: impl Into<String>) -> Self {
        Self {
            source,
            gender: gender.into(),
        }
    }

    /// Whether a record belongs to the selected subset.
    pub fn matches(&self, record: &PurchaseRecord) -> bool {
        record.gender == self.gender
    }
}
