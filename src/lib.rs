//! bch-wallet: HD receive addresses and balance tracking for Bitcoin Cash
//!
//! A wallet is a JSON file holding a mnemonic, its network and a counter of
//! issued receive addresses. Two operations work on it:
//!
//! - **Address generation**: derive `m/44'/145'/0'/0/{nextAddress}`, bump the
//!   counter, save the file, return the CashAddr
//! - **Balance refresh**: re-derive every issued address, poll its balance,
//!   rewrite `balance` and `hasBalance`
//!
//! # Example
//!
//! ```ignore
//! use bch_wallet::storage::Storage;
//! use bch_wallet::wallet::address_ops;
//!
//! let storage = Storage::new();
//! let address = address_ops::get_new_address(&storage, "savings")?;
//! println!("{}", address.address);
//! ```

pub mod chain;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod wallet;

pub use chain::{AddressBalance, BalanceProvider, Network, RestBalanceChecker};
pub use config::WalletConfig;
pub use error::{StorageError, WalletError};
pub use storage::{AddressBalanceEntry, Storage, WalletRecord};
pub use wallet::{AddressManager, DerivedAddress, WalletManager};
