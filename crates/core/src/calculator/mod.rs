//! Pure financial calculations.
//!
//! [`FinancialCalculator`] holds no state and performs no I/O. Every
//! operation is total over its inputs: nothing is validated and nothing
//! fails.

pub mod tax;

#[cfg(test)]
mod props;

use rust_decimal::Decimal;

pub use tax::{TAX_SCHEDULE, TaxBracket, apply_schedule, bracket_for};

/// Interest and progressive tax calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialCalculator;

impl FinancialCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Simple (non-compounding) interest: `principal * rate * time`.
    ///
    /// Zero or negative inputs are allowed and give the arithmetically
    /// consistent result.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `Decimal` (beyond ~7.9e28).
    #[must_use]
    pub fn calculate_interest(&self, principal: Decimal, rate: Decimal, time: Decimal) -> Decimal {
        principal * rate * time
    }

    /// Marginal progressive tax on `income - deductions`.
    ///
    /// | Taxable income        | Tax                                   |
    /// |-----------------------|---------------------------------------|
    /// | ≤ 50,000              | `taxable * 0.10`                      |
    /// | 50,000 < t ≤ 100,000  | `5,000 + (taxable - 50,000) * 0.20`   |
    /// | > 100,000             | `15,000 + (taxable - 100,000) * 0.30` |
    ///
    /// When deductions exceed income the result is negative.
    #[must_use]
    pub fn calculate_tax(&self, income: Decimal, deductions: Decimal) -> Decimal {
        apply_schedule(income - deductions)
    }
}
