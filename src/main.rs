//! bank_ledger service entry point.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌────────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│  Transfer  │───▶│ Gateway  │
//! │  (YAML)  │    │  (pool)  │    │   Engine   │    │  (axum)  │
//! └──────────┘    └──────────┘    └────────────┘    └──────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use bank_ledger::account::{Database, schema};
use bank_ledger::config::AppConfig;
use bank_ledger::gateway;
use bank_ledger::gateway::state::AppState;
use bank_ledger::logging::init_logging;
use bank_ledger::transfer::{HistoryReader, TransferEngine};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn use_seed_mode() -> bool {
    std::env::args().any(|a| a == "--seed")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = init_logging(&config);

    tracing::info!("Starting bank_ledger in {} mode", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    schema::ensure_schema(db.pool()).await?;

    if use_seed_mode() {
        schema::seed_demo_data(db.pool()).await?;
    }

    let engine = Arc::new(TransferEngine::new(
        db.pool().clone(),
        config.transfer.max_retries,
        Duration::from_millis(config.transfer.retry_backoff_ms),
    ));
    let history = Arc::new(HistoryReader::new(db.pool().clone()));
    let state = Arc::new(AppState::new(db, engine, history));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::serve(state, &config.gateway.host, port).await
}
