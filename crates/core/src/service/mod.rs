//! Unified financial API.

pub mod financial;


pub use financial::FinancialService;
