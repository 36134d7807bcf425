//! The concurrent funds-transfer protocol: engine, history reader and the
//! ledger error taxonomy.

pub mod engine;
pub mod error;
pub mod history;

pub use engine::{TransferEngine, TransferReceipt};
pub use error::{LedgerError, is_serialization_conflict};
pub use history::HistoryReader;
