use std::sync::Arc;

use crate::types::{PurchaseRecord, Selection};
use crate::utils::{group_by, max_value};

/// Axis domains computed once from the full dataset.
///
/// Filtered re-renders reuse these so that charts stay visually comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct Domains {
    /// Largest purchase amount, or `None` when no amount parsed
    pub max_purchase_amount: Option<f64>,
    /// Largest family size, or `None` when no family size parsed
    pub max_family_size: Option<u32>,
    /// Distinct genders in first-occurrence order
    pub genders: Vec<String>,
}

impl Domains {
    fn compute(records: &[PurchaseRecord]) -> Self {
        let refs: Vec<&PurchaseRecord> = records.iter().collect();
        let genders = group_by(&refs, |r| r.gender.clone()).into_keys().collect();

        Self {
            max_purchase_amount: max_value(records, |r| r.purchase_amount),
            max_family_size: records.iter().filter_map(|r| r.family_size).max(),
            genders,
        }
    }

    /// Position of `gender` in the full dataset's gender order.
    pub fn gender_index(&self, gender: &str) -> Option<usize> {
        self.genders.iter().position(|g| g == gender)
    }
}

/// The immutable, shared set of purchase records loaded at startup.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[PurchaseRecord]>,
    domains: Arc<Domains>,
}

impl RecordStore {
    pub fn new(records: Vec<PurchaseRecord>) -> Self {
        let domains = Domains::compute(&records);
        Self {
            records: records.into(),
            domains: Arc::new(domains),
        }
    }

    pub fn records(&self) -> &[PurchaseRecord] {
        &self.records
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in load order.
    pub fn all(&self) -> Vec<&PurchaseRecord> {
        self.records.iter().collect()
    }

    /// A fresh subset of the full dataset matching `selection`.
    pub fn filter(&self, selection: &Selection) -> Vec<&PurchaseRecord> {
        self.records.iter().filter(|r| selection.matches(r)).collect()
    }
}
