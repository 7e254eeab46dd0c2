/// Wallet Core Module
///
/// - `address_manager.rs` - HD derivation and address encoding
/// - `address_ops.rs` - Receive-address generation
/// - `balance_ops.rs` - Balance reconciliation
/// - `manager.rs` - Orchestrator used by the CLI

pub mod address_manager;
pub mod address_ops;
pub mod balance_ops;
pub mod manager;

pub use address_manager::{AddressManager, DerivedAddress};
pub use manager::{BalanceUpdate, WalletManager};
