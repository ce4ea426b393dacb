//! Core business logic for Tally.
//!
//! This crate holds the ledger domain, calculations, reports and statement
//! notification. It has no database or HTTP dependencies; storage and mail
//! delivery are reached through traits.
//!
//! # Modules
//!
//! - `calculator` - Interest and progressive tax
//! - `ledger` - Transactions, users, periods and repository traits
//! - `reports` - Monthly summaries and yearly tax reports
//! - `notification` - Monthly statement rendering and dispatch
//! - `service` - The `FinancialService` facade

pub mod calculator;
pub mod ledger;
pub mod notification;
pub mod reports;
pub mod service;

pub use calculator::FinancialCalculator;
pub use ledger::{InMemoryStore, LedgerError, TransactionRepository, UserRepository};
pub use notification::EmailService;
pub use reports::{ReportGenerator, TaxReport};
pub use service::FinancialService;
