//! Report generator.

use std::sync::Arc;

use tally_shared::types::UserId;
use tracing::debug;

use super::types::TaxReport;
use crate::calculator::FinancialCalculator;
use crate::ledger::{LedgerError, PeriodAggregate, TransactionKind, TransactionRepository};

/// Composes the ledger and the calculator into reports.
#[derive(Debug)]
pub struct ReportGenerator<T> {
    transactions: Arc<T>,
    calculator: FinancialCalculator,
}

impl<T> Clone for ReportGenerator<T> {
    fn clone(&self) -> Self {
        Self {
            transactions: Arc::clone(&self.transactions),
            calculator: self.calculator,
        }
    }
}

impl<T: TransactionRepository> ReportGenerator<T> {
    /// Creates a generator over the given ledger.
    pub const fn new(transactions: Arc<T>, calculator: FinancialCalculator) -> Self {
        Self {
            transactions,
            calculator,
        }
    }

    /// Per-kind totals for one calendar month.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the ledger cannot be read.
    pub async fn generate_monthly_report(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<PeriodAggregate>, LedgerError> {
        self.transactions
            .get_period_transactions(user_id, month, year)
            .await
    }

    /// Income, deductions and tax owed for one calendar year.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the ledger cannot be read.
    pub async fn generate_tax_report(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<TaxReport, LedgerError> {
        let total_income = self
            .transactions
            .get_yearly_total(user_id, year, TransactionKind::Income)
            .await?;
        let total_deductions = self
            .transactions
            .get_yearly_total(user_id, year, TransactionKind::Deduction)
            .await?;

        let tax_owed = self.calculator.calculate_tax(total_income, total_deductions);

        debug!(user_id = %user_id, year, %tax_owed, "Generated tax report");

        Ok(TaxReport {
            year,
            total_income,
            total_deductions,
            tax_owed,
        })
    }
}
