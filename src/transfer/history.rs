//! Read-only, order-guaranteed view of the transaction ledger.

use sqlx::PgPool;

use super::error::LedgerError;
use crate::account::TransactionRecord;

/// Queries the ledger for one account, most recent entry first.
///
/// Plain reads under the store's default consistency; no row locks.
pub struct HistoryReader {
    pool: PgPool,
}

impl HistoryReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All ledger entries where the account is sender or receiver, ordered
    /// by timestamp descending.
    pub async fn get_history(
        &self,
        account_id: i64,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let exists = sqlx::query_scalar::<_, i64>(r#"SELECT id FROM accounts WHERE id = $1"#)
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;

        if exists.is_none() {
            return Err(LedgerError::AccountNotFound(account_id));
        }

        let records = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT id, from_account, to_account, amount, timestamp
            FROM transactions
            WHERE from_account = $1 OR to_account = $1
            ORDER BY timestamp DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
