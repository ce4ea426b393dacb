//! Ledger domain types.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{TransactionId, UserId};

/// Caller-supplied tag used to group transactions.
///
/// `"income"` and `"deduction"` feed the tax report; any other tag is kept
/// as-is and only matters for grouping. Equality and hashing follow the tag
/// string, so `Other("income".into())` equals `Income`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    /// Income counted towards taxable income.
    Income,
    /// Deduction subtracted from taxable income.
    Deduction,
    /// Any other tag.
    Other(String),
}

impl TransactionKind {
    /// Tag for income transactions.
    pub const INCOME: &'static str = "income";
    /// Tag for deduction transactions.
    pub const DEDUCTION: &'static str = "deduction";

    /// Returns the stored tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => Self::INCOME,
            Self::Deduction => Self::DEDUCTION,
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(tag: &str) -> Self {
        match tag {
            Self::INCOME => Self::Income,
            Self::DEDUCTION => Self::Deduction,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for TransactionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::INCOME => Self::Income,
            Self::DEDUCTION => Self::Deduction,
            _ => Self::Other(tag),
        }
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(tag) => tag,
            named => named.as_str().to_string(),
        }
    }
}

impl PartialEq for TransactionKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TransactionKind {}

impl Hash for TransactionKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable ledger fact.
///
/// Created only by a repository's save operation and never updated or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the store.
    pub id: TransactionId,
    /// Owner of the transaction.
    pub user_id: UserId,
    /// Signed amount; the sign convention is up to the caller.
    pub amount: Decimal,
    /// Grouping tag.
    pub kind: TransactionKind,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
}

/// A user's identity and contact data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Statement address.
    pub email: String,
}

/// Sum and count of one kind of transaction within a period.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// Transaction kind tag.
    pub kind: String,
    /// Sum of amounts.
    pub total: Decimal,
    /// Number of transactions.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(TransactionKind::from("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::from("deduction"), TransactionKind::Deduction);
        assert_eq!(
            TransactionKind::from("groceries"),
            TransactionKind::Other("groceries".to_string())
        );
    }

    #[test]
    fn test_kind_tags_are_case_sensitive() {
        assert_eq!(
            TransactionKind::from("Income"),
            TransactionKind::Other("Income".to_string())
        );
    }

    #[test]
    fn test_kind_equality_follows_tag() {
        assert_eq!(
            TransactionKind::Other("income".to_string()),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_kind_serializes_as_tag() {
        let json = serde_json::to_string(&TransactionKind::Deduction).unwrap();
        assert_eq!(json, "\"deduction\"");

        let kind: TransactionKind = serde_json::from_str("\"rent\"").unwrap();
        assert_eq!(kind, TransactionKind::Other("rent".to_string()));
        assert_eq!(kind.to_string(), "rent");
    }
}
