//! Ledger error types.
//!
//! Calculations never fail; only store-backed operations return these.

use tally_shared::AppError;
use tally_shared::types::UserId;
use thiserror::Error;

/// Errors that can occur during ledger and profile operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The underlying store is unreachable or a write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The user does not exist.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Input rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LedgerError {
    /// Wraps a store failure.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(_) => "STORAGE_ERROR",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Storage(msg) => Self::Storage(msg),
            LedgerError::UserNotFound(id) => Self::NotFound(format!("user {id}")),
            LedgerError::Validation(msg) => Self::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_shared::types::UserId;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::storage("down").error_code(), "STORAGE_ERROR");
        assert_eq!(
            LedgerError::UserNotFound(UserId::new()).error_code(),
            "USER_NOT_FOUND"
        );
        assert_eq!(
            LedgerError::Validation("bad".into()).error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_into_app_error() {
        let id = UserId::new();
        let app: AppError = LedgerError::UserNotFound(id).into();
        assert_eq!(app.error_code(), "NOT_FOUND");
        assert_eq!(app.to_string(), format!("Not found: user {id}"));

        let app: AppError = LedgerError::storage("connection refused").into();
        assert_eq!(app.to_string(), "Storage error: connection refused");
    }
}
