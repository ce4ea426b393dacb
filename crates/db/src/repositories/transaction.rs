//! Transaction ledger repository backed by Postgres.
//!
//! Every write is a single-row insert, so concurrent saves are never lost or
//! merged. Month and year filters are translated to half-open `created_at`
//! ranges; grouping by kind happens after the rows are read so ordering does
//! not depend on the database collation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use tally_core::ledger::{
    LedgerError, MonthPeriod, PeriodAggregate, TransactionKind,
    TransactionRepository as TransactionRepoTrait, YearPeriod, aggregate_by_kind,
};
use tally_shared::types::{TransactionId, UserId};
use tracing::debug;

use crate::entities::transactions;

/// Postgres transaction ledger.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a transaction with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the insert fails.
    pub async fn record_transaction_at(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: TransactionKind,
        created_at: DateTime<Utc>,
    ) -> Result<TransactionId, LedgerError> {
        let id = TransactionId::new();
        let model = transactions::ActiveModel {
            id: Set(id.into_inner()),
            user_id: Set(user_id.into_inner()),
            amount: Set(amount),
            kind: Set(kind.into()),
            created_at: Set(created_at.into()),
        };

        model.insert(&self.db).await.map_err(LedgerError::storage)?;

        debug!(transaction_id = %id, user_id = %user_id, "Transaction inserted");
        Ok(id)
    }

    /// `SUM(amount)` over the user's rows matching `condition`, zero when none.
    async fn sum_amount(&self, user_id: UserId, condition: Condition) -> Result<Decimal, LedgerError> {
        let total: Option<Option<Decimal>> = transactions::Entity::find()
            .select_only()
            .column_as(Expr::col(transactions::Column::Amount).sum(), "total")
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .filter(condition)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(LedgerError::storage)?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}

/// Rows with `created_at` in `[start, end)`.
fn created_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(transactions::Column::CreatedAt.gte(start))
        .add(transactions::Column::CreatedAt.lt(end))
}

impl TransactionRepoTrait for TransactionRepository {
    async fn save_transaction(
        &self,
        user_id: UserId,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<TransactionId, LedgerError> {
        self.record_transaction_at(user_id, amount, kind, Utc::now())
            .await
    }

    async fn get_user_balance(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        self.sum_amount(user_id, Condition::all()).await
    }

    async fn get_period_transactions(
        &self,
        user_id: UserId,
        month: u32,
        year: i32,
    ) -> Result<Vec<PeriodAggregate>, LedgerError> {
        let Some((start, end)) = MonthPeriod::new(month, year).bounds() else {
            return Ok(vec![]);
        };

        let rows: Vec<(String, Decimal)> = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::Kind)
            .column(transactions::Column::Amount)
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .filter(created_between(start, end))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(LedgerError::storage)?;

        Ok(aggregate_by_kind(rows))
    }

    async fn get_yearly_total(
        &self,
        user_id: UserId,
        year: i32,
        kind: TransactionKind,
    ) -> Result<Decimal, LedgerError> {
        let Some((start, end)) = YearPeriod::new(year).bounds() else {
            return Ok(Decimal::ZERO);
        };

        self.sum_amount(
            user_id,
            created_between(start, end).add(transactions::Column::Kind.eq(kind.as_str())),
        )
        .await
    }
}

