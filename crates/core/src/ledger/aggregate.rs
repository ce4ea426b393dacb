//! Grouping of ledger rows into period aggregates.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::PeriodAggregate;

/// Groups `(kind, amount)` rows by kind.
///
/// Returns one aggregate per kind present, ordered lexicographically by kind.
/// Kinds with no rows do not appear.
pub fn aggregate_by_kind<I, K>(rows: I) -> Vec<PeriodAggregate>
where
    I: IntoIterator<Item = (K, Decimal)>,
    K: AsRef<str>,
{
    let mut groups: BTreeMap<String, (Decimal, u64)> = BTreeMap::new();

    for (kind, amount) in rows {
        let kind = kind.as_ref();
        if let Some((total, count)) = groups.get_mut(kind) {
            *total += amount;
            *count += 1;
        } else {
            groups.insert(kind.to_string(), (amount, 1));
        }
    }

    groups
        .into_iter()
        .map(|(kind, (total, count))| PeriodAggregate { kind, total, count })
        .collect()
}
