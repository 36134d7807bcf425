//! Ledger schema bootstrap.
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` statements run at startup. This is
//! deliberately not a migration framework; evolving an existing deployment's
//! schema is out of scope.

use anyhow::Result;
use sqlx::PgPool;

const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL
)
"#;

const CREATE_ACCOUNTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id          BIGSERIAL PRIMARY KEY,
    customer_id BIGINT NOT NULL REFERENCES customers(id),
    balance     NUMERIC(20, 4) NOT NULL DEFAULT 0
)
"#;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id           BIGSERIAL PRIMARY KEY,
    from_account BIGINT NOT NULL REFERENCES accounts(id),
    to_account   BIGINT NOT NULL REFERENCES accounts(id),
    amount       NUMERIC(20, 4) NOT NULL,
    timestamp    TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

// History queries filter on either side of a transfer.
const CREATE_TRANSACTION_INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_transactions_from_account ON transactions (from_account);
CREATE INDEX IF NOT EXISTS idx_transactions_to_account ON transactions (to_account)
"#;

/// Ensure all ledger tables exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Ensuring ledger schema...");

    sqlx::query(CREATE_CUSTOMERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create customers table: {}", e))?;

    sqlx::query(CREATE_ACCOUNTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create accounts table: {}", e))?;

    sqlx::query(CREATE_TRANSACTIONS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create transactions table: {}", e))?;

    for stmt in CREATE_TRANSACTION_INDEXES.split(';') {
        let stmt = stmt.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create transaction index: {}", e))?;
        }
    }

    tracing::info!("Ledger schema ready");
    Ok(())
}

/// Seed a handful of demo customers and accounts for manual testing.
///
/// No-op when customers already exist, so repeated `--seed` runs stay
/// idempotent.
pub async fn seed_demo_data(pool: &PgPool) -> Result<()> {
    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    if customers > 0 {
        tracing::info!("Seed skipped: {} customers already present", customers);
        return Ok(());
    }

    for (name, balances) in [
        ("Alice Example", vec!["1000.00", "250.00"]),
        ("Bob Example", vec!["500.00"]),
    ] {
        let customer_id: i64 = sqlx::query_scalar("INSERT INTO customers (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await?;

        for balance in balances {
            sqlx::query("INSERT INTO accounts (customer_id, balance) VALUES ($1, $2::numeric)")
                .bind(customer_id)
                .bind(balance)
                .execute(pool)
                .await?;
        }

        tracing::info!(customer_id, name, "Seeded demo customer");
    }

    Ok(())
}
