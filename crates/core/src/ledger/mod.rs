//! Append-only transaction ledger.
//!
//! This module implements:
//! - Domain types for transactions, users and period aggregates
//! - Calendar period filtering
//! - Repository traits for the ledger and user profiles
//! - A concurrent in-memory store implementing both traits

pub mod aggregate;
pub mod error;
pub mod memory;
pub mod period;
pub mod repository;
pub mod types;

#[cfg(test)]
mod memory_props;

pub use aggregate::aggregate_by_kind;
pub use error::LedgerError;
pub use memory::InMemoryStore;
pub use period::{MonthPeriod, YearPeriod};
pub use repository::{TransactionRepository, UserRepository};
pub use types::{PeriodAggregate, Transaction, TransactionKind, User};
