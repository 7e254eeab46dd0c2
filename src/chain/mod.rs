//! Chain-facing collaborators
//!
//! - Network parameters
//! - CashAddr encoding
//! - Balance lookups

pub mod balance_checker;
pub mod cashaddr;
pub mod network;

pub use balance_checker::{AddressBalance, BalanceProvider, RestBalanceChecker};
pub use network::Network;
