//! Persistence seams for the ledger and user profiles.
//!
//! These traits are implemented by the db crate (Postgres) and by
//! [`InMemoryStore`](super::memory::InMemoryStore). Each call is
//! independently transactional; no locks are held across calls.

use std::future::Future;

use rust_decimal::Decimal;
use tally_shared::types::{TransactionId, UserId};

use super::error::LedgerError;
use super::types::{PeriodAggregate, TransactionKind, User};

/// Append-only transaction ledger.
pub trait TransactionRepository: Send + Sync {
    /// Appends one transaction stamped with the current time.
    ///
    /// The write is atomic: either the whole record is persisted or nothing is.
    fn save_transaction(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> impl Future<Output = Result<TransactionId, LedgerError>> + Send;

    /// Sum of all of the user's amounts, zero when the user has none.
    fn get_user_balance(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Decimal, LedgerError>> + Send;

    /// Per-kind sum and count for one calendar month, sorted by kind.
    fn get_period_transactions(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> impl Future<Output = Result<Vec<PeriodAggregate>, LedgerError>> + Send;

    /// Sum of one kind's amounts over a calendar year, zero when none.
    fn get_yearly_total(
        &self,
        user_id: UserId,
        year: i32,
        kind: TransactionKind,
    ) -> impl Future<Output = Result<Decimal, LedgerError>> + Send;
}

/// User identity and contact data.
pub trait UserRepository: Send + Sync {
    /// Inserts a new user.
    fn create_user(
        &self,
        name: &str,
        email: &str,
    ) -> impl Future<Output = Result<User, LedgerError>> + Send;

    /// Finds a user by ID.
    fn find_by_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<User>, LedgerError>> + Send;

    /// Overwrites name and email.
    ///
    /// Fails with [`LedgerError::UserNotFound`] for an unknown user.
    fn update_profile(
        &self,
        user_id: UserId,
        name: &str,
        email: &str,
    ) -> impl Future<Output = Result<(), LedgerError>> + Send;

    /// The stored email, or `None` if the user does not exist.
    fn get_email(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<String>, LedgerError>> + Send;
}
