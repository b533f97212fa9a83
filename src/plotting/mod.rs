//! Chart renderers and the adapter that paints their output with `plotters`.
//!
//! Each renderer turns a slice of records into a [`ChartFrame`] without
//! touching any drawing backend; [`chart::paint`] is the only place frames
//! meet `plotters`.

mod axis;
pub mod bar;
pub mod chart;
pub mod frame;
pub mod line;
pub mod pie;
pub mod scale;
pub mod styles;

pub use bar::{Bar, BarChart};
pub use chart::{paint, render_rgb, render_svg};
pub use frame::{ChartFrame, DrawCommand, HAnchor, Mark, VAnchor};
pub use line::{LineChart, Series};
pub use pie::{PieChart, Slice};
pub use styles::{ChartStyle, ChartTheme, Color};

use crate::types::{ChartKind, PurchaseRecord};

/// A chart that can be rendered from any subset of the record store.
///
/// `render` is pure: it recomputes every aggregate from `records` and
/// returns a frame that fully replaces whatever was drawn before.
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;

    fn render(&self, records: &[&PurchaseRecord]) -> ChartFrame;
}

#[cfg(test)]
mod tests;
