//! Property-based tests for the in-memory store.
//!
//! - Balance equals the sum of saved amounts, whatever the order
//! - Period aggregates partition the month's transactions by kind
//! - Yearly totals only see their own year and kind

use chrono::{DateTime, TimeZone, Utc};
use futures::executor::block_on;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::memory::InMemoryStore;
use super::repository::TransactionRepository;
use super::types::TransactionKind;

/// Signed amounts from -10,000.00 to 10,000.00.
fn signed_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Deduction),
        Just(TransactionKind::from("rent")),
        Just(TransactionKind::from("groceries")),
    ]
}

/// Timestamps spread over 2025 and 2026.
fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (2025i32..=2026, 1u32..=12, 1u32..=28, 0u32..24)
        .prop_map(|(y, m, d, h)| Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_balance_is_sum_of_amounts(
        amounts in prop::collection::vec(signed_amount(), 0..50),
    ) {
        let expected: Decimal = amounts.iter().copied().sum();

        let forward = InMemoryStore::new();
        let backward = InMemoryStore::new();
        let user = UserId::new();

        for amount in &amounts {
            block_on(forward.save_transaction(user, *amount, TransactionKind::Income)).unwrap();
        }
        for amount in amounts.iter().rev() {
            block_on(backward.save_transaction(user, *amount, TransactionKind::Income)).unwrap();
        }

        prop_assert_eq!(block_on(forward.get_user_balance(user)).unwrap(), expected);
        prop_assert_eq!(block_on(backward.get_user_balance(user)).unwrap(), expected);
    }

    #[test]
    fn prop_period_aggregates_partition_month(
        rows in prop::collection::vec((signed_amount(), kind_strategy(), timestamp()), 0..60),
        month in 1u32..=12,
        year in 2025i32..=2026,
    ) {
        let store = InMemoryStore::new();
        let user = UserId::new();
        for (amount, kind, at) in &rows {
            store.record_transaction_at(user, *amount, kind.clone(), *at);
        }

        let report = block_on(store.get_period_transactions(user, month, year)).unwrap();

        let in_month: Vec<_> = rows
            .iter()
            .filter(|(_, _, at)| at.format("%Y-%m").to_string() == format!("{year}-{month:02}"))
            .collect();

        let total_count: u64 = report.iter().map(|a| a.count).sum();
        prop_assert_eq!(total_count, in_month.len() as u64);

        let total_sum: Decimal = report.iter().map(|a| a.total).sum();
        let expected_sum: Decimal = in_month.iter().map(|(amount, _, _)| *amount).sum();
        prop_assert_eq!(total_sum, expected_sum);

        // Sorted, one entry per kind, no empty groups
        for pair in report.windows(2) {
            prop_assert!(pair[0].kind < pair[1].kind);
        }
        prop_assert!(report.iter().all(|a| a.count > 0));
    }

    #[test]
    fn prop_yearly_total_matches_filter(
        rows in prop::collection::vec((signed_amount(), kind_strategy(), timestamp()), 0..60),
        year in 2025i32..=2026,
        kind in kind_strategy(),
    ) {
        let store = InMemoryStore::new();
        let user = UserId::new();
        for (amount, k, at) in &rows {
            store.record_transaction_at(user, *amount, k.clone(), *at);
        }

        let expected: Decimal = rows
            .iter()
            .filter(|(_, k, at)| *k == kind && at.format("%Y").to_string() == year.to_string())
            .map(|(amount, _, _)| *amount)
            .sum();

        prop_assert_eq!(
            block_on(store.get_yearly_total(user, year, kind)).unwrap(),
            expected
        );
    }
}
