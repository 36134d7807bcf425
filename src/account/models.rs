//! Row models for customers, accounts and the transaction ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Bank customer. Owns zero or more accounts.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

/// Account row. The balance is mutated only through deposit, withdraw or
/// transfer, each atomic with its store transaction.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub customer_id: i64,
    /// Exact decimal balance (NUMERIC in the store, never floating point).
    #[schema(value_type = String, example = "1000.00")]
    pub balance: Decimal,
}

/// Immutable ledger entry, written exactly once per committed transfer.
///
/// Deposits and withdrawals change a single balance and do not produce a
/// ledger entry; only inter-account transfers are recorded here.
#[derive(Debug, Clone, Serialize, ToSchema, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: i64,
    pub from_account: i64,
    pub to_account: i64,
    #[schema(value_type = String, example = "50.00")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}
