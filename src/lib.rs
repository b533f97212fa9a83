//! # Purchase Dashboard
//!
//! `purchase_dashboard` loads a CSV file of customer purchase records and
//! renders three linked charts over it:
//!
//! - a bar chart of the average purchase amount by gender,
//! - a multi-line chart of the average purchase amount by family size, one
//!   line per gender,
//! - a pie chart of the payment-method distribution.
//!
//! Clicking a bar or a line point filters the two other charts to that
//! gender. Every chart is a pure function from a record subset to a
//! [`plotting::ChartFrame`] of draw commands, which the GUI paints with
//! `plotters` and shows through `egui`.
//!
//! ## Example
//!
//! ```no_run
//! use purchase_dashboard::app::Dashboard;
//! use purchase_dashboard::data::load_records;
//! use purchase_dashboard::plotting::{render_svg, ChartTheme};
//! use purchase_dashboard::types::{ChartKind, Selection};
//!
//! let store = load_records("data.csv".as_ref())?;
//! let mut dashboard = Dashboard::new(store);
//!
//! // Same as clicking the "Male" bar
//! dashboard.select(Selection::new(ChartKind::Bar, "Male"));
//!
//! let svg = render_svg(dashboard.frame(ChartKind::Pie), &ChartTheme::default())?;
//! println!("{}", svg);
//! # Ok::<(), purchase_dashboard::DashboardError>(())
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::{App as DashboardApp, Dashboard};
pub use config::DashboardConfig;
pub use error::DashboardError;
pub use types::{ChartKind, PurchaseRecord, Selection};
