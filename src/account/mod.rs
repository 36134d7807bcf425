//! Account management: connection pool, schema bootstrap, row models and
//! repositories. Balance mutation lives in [`crate::transfer`].

pub mod db;
pub mod models;
pub mod repository;
pub mod schema;

pub use db::Database;
pub use models::{Account, Customer, TransactionRecord};
pub use repository::{AccountRepository, CustomerRepository};
