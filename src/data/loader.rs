use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;

use super::RecordStore;
use crate::error::{DashboardError, Result};
use crate::types::PurchaseRecord;

const GENDER: &str = "Gender";
const FAMILY_SIZE: &str = "FamilySize";
const PURCHASE_AMOUNT: &str = "PurchaseAmount";
const PAYMENT_METHOD: &str = "PaymentMethod";

/// Column positions of the fields we read; other columns are ignored.
struct Columns {
    gender: usize,
    family_size: usize,
    purchase_amount: usize,
    payment_method: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DashboardError::MissingColumn(name))
        };

        Ok(Self {
            gender: find(GENDER)?,
            family_size: find(FAMILY_SIZE)?,
            purchase_amount: find(PURCHASE_AMOUNT)?,
            payment_method: find(PAYMENT_METHOD)?,
        })
    }
}

/// Load the dataset asynchronously. Parsing runs on a blocking worker.
pub async fn load_records_async(path: PathBuf) -> Result<RecordStore> {
    spawn_blocking(move || load_records(&path)).await?
}

/// Load the dataset from a CSV file on disk.
pub fn load_records(path: &Path) -> Result<RecordStore> {
    info!("loading purchase records from {}", path.display());
    let file = File::open(path).map_err(|e| DashboardError::io(path, e))?;
    let store = read_records(file)?;
    info!("loaded {} purchase records", store.len());
    Ok(store)
}

/// Parse CSV text with a header row into a record store.
///
/// Numeric cells that do not parse are kept: the amount becomes `NaN`, the
/// family size becomes `None`. Each one is logged.
pub fn read_records<R: Read>(input: R) -> Result<RecordStore> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let columns = Columns::locate(reader.headers()?)?;
    let mut records = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // header is line 1
        let line = index + 2;
        let cell = |i: usize| row.get(i).unwrap_or_default();

        records.push(PurchaseRecord {
            gender: cell(columns.gender).to_string(),
            family_size: parse_family_size(cell(columns.family_size), line),
            purchase_amount: parse_amount(cell(columns.purchase_amount), line),
            payment_method: cell(columns.payment_method).to_string(),
        });
    }

    Ok(RecordStore::new(records))
}

fn parse_amount(raw: &str, line: usize) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!("line {}: {} `{}` is not a number", line, PURCHASE_AMOUNT, raw);
            f64::NAN
        }
    }
}

fn parse_family_size(raw: &str, line: usize) -> Option<u32> {
    let parsed = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0 && *v <= u32::MAX as f64);

    match parsed {
        Some(value) => Some(value as u32),
        None => {
            warn!(
                "line {}: {} `{}` is not a non-negative integer",
                line, FAMILY_SIZE, raw
            );
            None
        }
    }
}
