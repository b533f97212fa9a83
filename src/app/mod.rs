mod dashboard;
mod filter;
mod state;
pub mod ui;

pub use dashboard::Dashboard;
pub use filter::{CrossFilter, FilterState};
pub use state::{load_in_background, App, AppWrapper};
