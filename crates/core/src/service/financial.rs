//! Financial service orchestrating ledger, reports and notifications.

use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::email::MailTransport;
use tally_shared::types::{TransactionId, UserId};
use tracing::{debug, info, instrument};

use crate::calculator::FinancialCalculator;
use crate::ledger::{
    LedgerError, MonthPeriod, PeriodAggregate, TransactionKind, TransactionRepository,
    UserRepository,
};
use crate::notification::EmailService;
use crate::reports::{ReportGenerator, TaxReport};

/// Entry point for callers.
///
/// Holds only shared handles to its collaborators and no business rules of
/// its own; every operation is a single request/response.
pub struct FinancialService<T, U, M>
where
    T: TransactionRepository,
    U: UserRepository,
    M: MailTransport,
{
    transactions: Arc<T>,
    users: Arc<U>,
    calculator: FinancialCalculator,
    reports: ReportGenerator<T>,
    emails: EmailService<M>,
}

impl<T, U, M> FinancialService<T, U, M>
where
    T: TransactionRepository,
    U: UserRepository,
    M: MailTransport,
{
    /// Wires the service over the given stores and mail transport.
    pub fn new(transactions: Arc<T>, users: Arc<U>, transport: Arc<M>) -> Self {
        let calculator = FinancialCalculator::new();
        Self {
            reports: ReportGenerator::new(Arc::clone(&transactions), calculator),
            emails: EmailService::new(transport),
            transactions,
            users,
            calculator,
        }
    }

    /// Records a transaction for a user.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the ledger rejects the write.
    pub async fn save_transaction(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: impl Into<TransactionKind>,
    ) -> Result<TransactionId, LedgerError> {
        let kind = kind.into();
        let id = self
            .transactions
            .save_transaction(user_id, amount, kind.clone())
            .await?;
        debug!(user_id = %user_id, transaction_id = %id, %kind, %amount, "Transaction saved");
        Ok(id)
    }

    /// Current balance of a user.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the ledger cannot be read.
    pub async fn get_user_balance(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        self.transactions.get_user_balance(user_id).await
    }

    /// Replaces a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UserNotFound` for an unknown user, or
    /// `LedgerError::Storage` if the write fails.
    pub async fn update_user_profile(
        &self,
        user_id: UserId,
        name: &str,
        email: &str,
    ) -> Result<(), LedgerError> {
        self.users.update_profile(user_id, name, email).await?;
        info!(user_id = %user_id, "User profile updated");
        Ok(())
    }

    /// Simple interest, `principal * rate * time`.
    #[must_use]
    pub fn calculate_interest(&self, principal: Decimal, rate: Decimal, time: Decimal) -> Decimal {
        self.calculator.calculate_interest(principal, rate, time)
    }

    /// Progressive tax on `income - deductions`.
    #[must_use]
    pub fn calculate_tax(&self, income: Decimal, deductions: Decimal) -> Decimal {
        self.calculator.calculate_tax(income, deductions)
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
        self.reports
            .generate_monthly_report(user_id, month, year)
            .await
    }

    /// Tax report for one calendar year.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the ledger cannot be read.
    pub async fn generate_tax_report(
        &self,
        user_id: UserId,
        year: i32,
    ) -> Result<TaxReport, LedgerError> {
        self.reports.generate_tax_report(user_id, year).await
    }

    /// Sends the statement for the current UTC month.
    ///
    /// # Errors
    ///
    /// See [`Self::send_statement_for_period`].
    pub async fn send_monthly_statement(&self, user_id: UserId) -> Result<(), LedgerError> {
        let period = MonthPeriod::current();
        self.send_statement_for_period(user_id, period.month, period.year)
            .await
    }

    /// Sends the statement for an explicit month.
    ///
    /// A user without an email on file is skipped and the call succeeds.
    /// Mail delivery failures are logged, not returned.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the user or ledger cannot be read.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn send_statement_for_period(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<(), LedgerError> {
        let email = self
            .users
            .get_email(user_id)
            .await?
            .filter(|email| !email.trim().is_empty());

        let Some(email) = email else {
            debug!("No email on file, skipping statement");
            return Ok(());
        };

        let balance = self.transactions.get_user_balance(user_id).await?;
        let report = self
            .reports
            .generate_monthly_report(user_id, month, year)
            .await?;

        self.emails
            .send_monthly_statement(&email, balance, &report)
            .await;
        Ok(())
    }
}
