//! Report generation over the transaction ledger.
//!
//! - Monthly per-kind summaries
//! - Yearly tax reports

pub mod generator;
pub mod types;


pub use generator::ReportGenerator;
pub use types::TaxReport;
