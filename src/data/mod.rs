mod loader;
mod store;

pub use loader::{load_records, load_records_async, read_records};
pub use store::{Domains, RecordStore};
