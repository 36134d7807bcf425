use thiserror::Error;

/// Failure taxonomy for ledger operations.
///
/// `InvalidAmount`, `SameAccount` and `PermissionDenied` are produced before
/// any store access. `AccountNotFound` and `InsufficientFunds` are decided
/// inside the transaction, which is rolled back. `Internal` wraps the raw
/// store error for logging; the gateway never exposes the detail.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("cannot transfer money to the same account")]
    SameAccount,

    #[error("permission denied")]
    PermissionDenied,

    #[error("account not found: {0}")]
    AccountNotFound(i64),

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("store conflict persisted after {0} attempts, try again later")]
    TransientStore(u32),

    #[error("database error: {0}")]
    Internal(#[from] sqlx::Error),
}

impl LedgerError {
    /// True when the underlying store error is a serialization failure or a
    /// deadlock report, i.e. the whole attempt may be retried on a fresh
    /// transaction.
    pub fn is_conflict(&self) -> bool {
        match self {
            LedgerError::Internal(e) => is_serialization_conflict(e),
            _ => false,
        }
    }
}

/// SQLSTATE 40001 = serialization_failure, 40P01 = deadlock_detected.
///
/// Under SERIALIZABLE isolation PostgreSQL may abort a transaction with
/// 40001 even when the ascending-id locking discipline was followed; that is
/// expected behavior, not a bug.
pub fn is_serialization_conflict(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "40001" || code == "40P01")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_not_conflicts() {
        assert!(!LedgerError::InvalidAmount.is_conflict());
        assert!(!LedgerError::SameAccount.is_conflict());
        assert!(!LedgerError::PermissionDenied.is_conflict());
        assert!(!LedgerError::AccountNotFound(42).is_conflict());
        assert!(!LedgerError::InsufficientFunds.is_conflict());
        assert!(!LedgerError::TransientStore(3).is_conflict());
    }

    #[test]
    fn test_non_database_internal_error_is_not_a_conflict() {
        let err = LedgerError::Internal(sqlx::Error::RowNotFound);
        assert!(!err.is_conflict());
        assert!(!is_serialization_conflict(&sqlx::Error::PoolTimedOut));
    }
}
