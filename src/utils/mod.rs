pub mod aggregation;

pub use aggregation::{count, group_by, group_by2, max_value, mean, Groups};
