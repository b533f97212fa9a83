use indexmap::IndexMap;
use statrs::statistics::Statistics;
use std::hash::Hash;

/// Records grouped under one key, in first-occurrence order.
pub type Groups<'a, K, R> = IndexMap<K, Vec<&'a R>>;

/// Partition `records` by `key_fn`.
///
/// Every record lands in exactly one group. Groups iterate in the order
/// their key was first seen and keep the input order of their members.
pub fn group_by<'a, R, K, F>(records: &[&'a R], key_fn: F) -> Groups<'a, K, R>
where
    K: Hash + Eq,
    F: Fn(&R) -> K,
{
    let mut groups: Groups<'a, K, R> = IndexMap::new();
    for &record in records {
        groups.entry(key_fn(record)).or_default().push(record);
    }
    groups
}

/// Two-level grouping: `outer_fn` first, then `inner_fn` within each group.
pub fn group_by2<'a, R, K1, K2, F1, F2>(
    records: &[&'a R],
    outer_fn: F1,
    inner_fn: F2,
) -> IndexMap<K1, Groups<'a, K2, R>>
where
    K1: Hash + Eq,
    K2: Hash + Eq,
    F1: Fn(&R) -> K1,
    F2: Fn(&R) -> K2,
{
    group_by(records, outer_fn)
        .into_iter()
        .map(|(key, members)| (key, group_by(&members, &inner_fn)))
        .collect()
}

/// Arithmetic mean of `value_fn` over `records`.
///
/// `NaN` values are skipped. Returns `None` when nothing numeric is left,
/// which callers render as "no mark".
pub fn mean<R, F>(records: &[&R], value_fn: F) -> Option<f64>
where
    F: Fn(&R) -> f64,
{
    let values: Vec<f64> = records
        .iter()
        .map(|&record| value_fn(record))
        .filter(|value| !value.is_nan())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.iter().mean())
    }
}

/// Number of records in a group.
pub fn count<R>(records: &[&R]) -> usize {
    records.len()
}

/// Largest non-`NaN` value of `value_fn` over `records`.
pub fn max_value<R, F>(records: &[R], value_fn: F) -> Option<f64>
where
    F: Fn(&R) -> f64,
{
    records
        .iter()
        .map(value_fn)
        .filter(|value| !value.is_nan())
        .fold(None, |acc: Option<f64>, value| match acc {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PurchaseRecord;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    fn sample() -> Vec<PurchaseRecord> {
        vec![
            PurchaseRecord::new("Male", 3, 100.0, "Card"),
            PurchaseRecord::new("Male", 5, 200.0, "Cash"),
            PurchaseRecord::new("Female", 2, 150.0, "Card"),
            PurchaseRecord::new("Female", 4, 300.0, "Card"),
        ]
    }

    #[test]
    fn test_group_by_keeps_first_occurrence_order() {
        let records = sample();
        let refs: Vec<&PurchaseRecord> = records.iter().collect();

        let groups = group_by(&refs, |r| r.payment_method.clone());
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["Card", "Cash"]);
        assert_eq!(groups["Card"].len(), 3);
        assert_eq!(groups["Cash"][0].purchase_amount, 200.0);
    }

    #[test]
    fn test_group_by_partitions_random_input() {
        let mut rng = rand::thread_rng();
        let genders = ["Male", "Female", "Other"];
        let records: Vec<PurchaseRecord> = (0..500)
            .map(|_| {
                PurchaseRecord::new(
                    genders[rng.gen_range(0..genders.len())],
                    rng.gen_range(1..8),
                    rng.gen_range(0.0..1000.0),
                    "Card",
                )
            })
            .collect();
        let refs: Vec<&PurchaseRecord> = records.iter().collect();

        let groups = group_by(&refs, |r| r.gender.clone());
        let total: usize = groups.values().map(|members| count(members)).sum();
        assert_eq!(total, records.len());

        for (gender, members) in &groups {
            assert!(members.iter().all(|r| &r.gender == gender));
        }
        for record in &records {
            let hits = groups[&record.gender]
                .iter()
                .filter(|member| std::ptr::eq(**member, record))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_group_by2_nests_groups() {
        let records = sample();
        let refs: Vec<&PurchaseRecord> = records.iter().collect();

        let nested = group_by2(&refs, |r| r.gender.clone(), |r| r.family_size);
        assert_eq!(nested.len(), 2);
        let male = &nested["Male"];
        let sizes: Vec<Option<u32>> = male.keys().copied().collect();
        assert_eq!(sizes, vec![Some(3), Some(5)]);
        assert_eq!(male[&Some(5)][0].payment_method, "Cash");
    }

    #[test]
    fn test_mean() {
        let records = sample();
        let refs: Vec<&PurchaseRecord> = records.iter().collect();
        let groups = group_by(&refs, |r| r.gender.clone());

        assert_eq!(mean(&groups["Male"], |r| r.purchase_amount), Some(150.0));
        assert_eq!(mean(&groups["Female"], |r| r.purchase_amount), Some(225.0));
    }

    #[test]
    fn test_mean_of_empty_group_is_none() {
        let empty: Vec<&PurchaseRecord> = Vec::new();
        assert_eq!(mean(&empty, |r| r.purchase_amount), None);
        assert_eq!(count(&empty), 0);
    }

    #[test]
    fn test_mean_skips_nan() {
        let mut records = sample();
        records[0].purchase_amount = f64::NAN;
        let refs: Vec<&PurchaseRecord> = records[..2].iter().collect();
        assert_eq!(mean(&refs, |r| r.purchase_amount), Some(200.0));

        let only_nan: Vec<&PurchaseRecord> = records[..1].iter().collect();
        assert_eq!(mean(&only_nan, |r| r.purchase_amount), None);
    }

    #[test]
    fn test_max_value_ignores_nan() {
        let mut records = sample();
        records[3].purchase_amount = f64::NAN;
        assert_eq!(max_value(&records, |r| r.purchase_amount), Some(200.0));
        assert_eq!(max_value(&[] as &[PurchaseRecord], |r| r.purchase_amount), None);
    }
}
