pub mod accounts;
pub mod transfer;
