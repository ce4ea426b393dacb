//! Repository implementations for data access.
//!
//! Each repository implements the matching ledger trait from `tally-core`,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod transaction;
pub mod user;

pub use transaction::TransactionRepository;
pub use user::UserRepository;
