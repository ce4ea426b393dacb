//! In-memory ledger and user store.
//!
//! Backs tests and embedded use. Appends take the per-user map entry's write
//! guard, so concurrent saves never lose or duplicate a transaction.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use tally_shared::types::{TransactionId, UserId};

use super::aggregate::aggregate_by_kind;
use super::error::LedgerError;
use super::period::{MonthPeriod, YearPeriod};
use super::repository::{TransactionRepository, UserRepository};
use super::types::{PeriodAggregate, Transaction, TransactionKind, User};

#[derive(Debug, Default)]
struct Inner {
    transactions: DashMap<UserId, Vec<Transaction>>,
    users: DashMap<UserId, User>,
}

/// Thread-safe in-memory store.
///
/// Cloning yields another handle to the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction with an explicit timestamp.
    ///
    /// Used for back-dated imports and seeding; same atomicity as a save.
    pub fn record_transaction_at(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> TransactionId {
        let id = TransactionId::new();
        self.inner
            .transactions
            .entry(user_id)
            .or_default()
            .push(Transaction {
                id,
                user_id,
                amount,
                kind,
                created_at,
            });
        id
    }

    /// Snapshot of a user's transactions in insertion order.
    #[must_use]
    pub fn transactions_for(&self, user_id: UserId) -> Vec<Transaction> {
        self.inner
            .transactions
            .get(&user_id)
            .map(|txs| txs.clone())
            .unwrap_or_default()
    }

    fn sum_where<F>(&self, user_id: UserId, predicate: F) -> Decimal
    where
        F: Fn(&Transaction) -> bool,
    {
        self.inner
            .transactions
            .get(&user_id)
            .map_or(Decimal::ZERO, |txs| {
                txs.iter()
                    .filter(|tx| predicate(tx))
                    .map(|tx| tx.amount)
                    .sum()
            })
    }
}

impl TransactionRepository for InMemoryStore {
    async fn save_transaction(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<TransactionId, LedgerError> {
        Ok(self.record_transaction_at(user_id, amount, kind, Utc::now()))
    }

    async fn get_user_balance(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        Ok(self.sum_where(user_id, |_| true))
    }

    async fn get_period_transactions(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<PeriodAggregate>, LedgerError> {
        let period = MonthPeriod::new(month, year);

        let Some(txs) = self.inner.transactions.get(&user_id) else {
            return Ok(vec![]);
        };

        Ok(aggregate_by_kind(
            txs.iter()
                .filter(|tx| period.contains(&tx.created_at))
                .map(|tx| (tx.kind.as_str(), tx.amount)),
        ))
    }

    async fn get_yearly_total(
        &self,
        user_id: UserId,
        year: i32,
        kind: TransactionKind,
    ) -> Result<Decimal, LedgerError> {
        let period = YearPeriod::new(year);
        Ok(self.sum_where(user_id, |tx| {
            tx.kind == kind && period.contains(&tx.created_at)
        }))
    }
}

impl UserRepository for InMemoryStore {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, LedgerError> {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, LedgerError> {
        Ok(self.inner.users.get(&user_id).map(|user| user.clone()))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        name: &str,
        email: &str,
    ) -> Result<(), LedgerError> {
        let mut user = self
            .inner
            .users
            .get_mut(&user_id)
            .ok_or(LedgerError::UserNotFound(user_id))?;
        user.name = name.to_string();
        user.email = email.to_string();
        Ok(())
    }

    async fn get_email(&self, user_id: UserId) -> Result<Option<String>, LedgerError> {
        Ok(self.inner.users.get(&user_id).map(|user| user.email.clone()))
    }
}
