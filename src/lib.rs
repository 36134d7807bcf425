//! bank_ledger - Role-Gated Banking Ledger Service
//!
//! Customers own accounts, accounts hold balances, employees move money.
//! The core is the concurrent funds-transfer protocol: ascending-id row
//! locking, serializable isolation, bounded retry on conflict and an
//! append-only transaction log.
//!
//! # Modules
//!
//! - [`account`] - Store pool, schema bootstrap, row models, repositories
//! - [`auth`] - Employee roles and the rank check
//! - [`transfer`] - Transfer engine, history reader, error taxonomy
//! - [`gateway`] - Axum HTTP surface
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - Rolling-file + stdout tracing setup

pub mod account;
pub mod auth;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod transfer;

// Convenient re-exports at crate root
pub use account::{Account, Customer, Database, TransactionRecord};
pub use auth::{Role, require_role};
pub use transfer::{HistoryReader, LedgerError, TransferEngine, TransferReceipt};
