use std::sync::Arc;

use crate::account::Database;
use crate::transfer::{HistoryReader, TransferEngine};

/// Shared gateway state. Everything here is read-only or pool-backed; the
/// handlers hold no per-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub engine: Arc<TransferEngine>,
    pub history: Arc<HistoryReader>,
}

impl AppState {
    pub fn new(db: Arc<Database>, engine: Arc<TransferEngine>, history: Arc<HistoryReader>) -> Self {
        Self { db, engine, history }
    }
}
