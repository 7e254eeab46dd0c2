//! Common test utilities for wallet integration tests
//!
//! This module provides shared test infrastructure including:
//! - Isolated wallet directories
//! - Wallet file fixtures
//! - An in-memory balance provider standing in for the REST API

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use bch_wallet::{
    AddressBalance, AddressManager, BalanceProvider, Network, Storage, WalletError, WalletRecord,
};
use tempfile::TempDir;

pub const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

pub fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// Test environment with automatic cleanup
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub storage: Storage,
}

impl TestEnvironment {
    pub fn new() -> anyhow::Result<Self> {
        init_logging();

        let temp_dir = TempDir::new()?;
        log::info!("📁 Test directory: {:?}", temp_dir.path());

        let storage = Storage::new_with_base_dir(temp_dir.path().to_path_buf());

        Ok(Self { temp_dir, storage })
    }

    /// Write a wallet file the way an external wallet-creation tool would
    pub fn create_wallet(
        &self,
        name: &str,
        network: Network,
        next_address: u32,
    ) -> anyhow::Result<WalletRecord> {
        let mut record = WalletRecord::new(name, network, TEST_MNEMONIC);
        record.next_address = next_address;
        self.storage.save_wallet(name, &record)?;
        Ok(record)
    }

    pub fn raw_wallet(&self, name: &str) -> anyhow::Result<String> {
        Ok(std::fs::read_to_string(self.storage.wallet_path(name))?)
    }

    /// Addresses `0..count` for the test mnemonic
    pub fn addresses(&self, network: Network, count: u32) -> Vec<String> {
        AddressManager::new(TEST_MNEMONIC, network)
            .and_then(|m| m.derive_addresses(0, count))
            .map(|derived| derived.into_iter().map(|d| d.address).collect())
            .unwrap_or_default()
    }
}

pub fn sats(confirmed: u64, unconfirmed: i64) -> AddressBalance {
    AddressBalance {
        confirmed: confirmed as f64 / 100_000_000.0,
        confirmed_subunits: confirmed,
        unconfirmed: unconfirmed as f64 / 100_000_000.0,
        unconfirmed_subunits: unconfirmed,
    }
}

/// Balance provider answering from a fixed table
///
/// Unknown addresses report zero. Addresses in `failing` return a provider error.
/// Every lookup is recorded in call order.
#[derive(Default)]
pub struct MockBalanceProvider {
    balances: HashMap<String, AddressBalance>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockBalanceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, address: &str, balance: AddressBalance) -> Self {
        self.balances.insert(address.to_string(), balance);
        self
    }

    pub fn failing_on(mut self, address: &str) -> Self {
        self.failing.insert(address.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BalanceProvider for MockBalanceProvider {
    async fn get_balance(&self, address: &str) -> Result<AddressBalance, WalletError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(address.to_string());
        }

        if self.failing.contains(address) {
            return Err(WalletError::Provider(format!("mock failure for {}", address)));
        }

        Ok(self.balances.get(address).copied().unwrap_or_default())
    }
}
