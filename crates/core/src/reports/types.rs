//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Yearly tax summary, computed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReport {
    /// Calendar year covered.
    pub year: i32,
    /// Sum of `income` transactions in the year.
    pub total_income: Decimal,
    /// Sum of `deduction` transactions in the year.
    pub total_deductions: Decimal,
    /// Progressive tax on `total_income - total_deductions`.
    pub tax_owed: Decimal,
}

impl TaxReport {
    /// Taxable amount the report was computed from.
    #[must_use]
    pub fn taxable_income(&self) -> Decimal {
        self.total_income - self.total_deductions
    }
}
