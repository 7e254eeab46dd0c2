//! Storage and persistence layer
//!
//! - File system operations
//! - Data models

mod file_system;
mod models;

pub use file_system::Storage;
pub use models::{confirmed_subunits, AddressBalanceEntry, WalletRecord};
