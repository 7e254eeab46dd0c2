use super::address_manager::DerivedAddress;
use super::address_ops::{self, validate_wallet_name};
use super::balance_ops;
use crate::chain::{Network, RestBalanceChecker};
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::storage::{Storage, WalletRecord};

/// Outcome of a balance refresh, with the figure it replaced
#[derive(Debug, Clone)]
pub struct BalanceUpdate {
    pub previous_balance: f64,
    pub record: WalletRecord,
}

/// Entry point used by the CLI: wires storage and the REST provider together
pub struct WalletManager {
    pub storage: Storage,
    config: WalletConfig,
}

impl WalletManager {
    pub fn new(config: WalletConfig) -> Self {
        let storage = Storage::new_with_base_dir(config.wallets_dir.clone());
        Self { storage, config }
    }

    pub fn new_with_storage(storage: Storage, config: WalletConfig) -> Self {
        Self { storage, config }
    }

    pub fn get_new_address(&self, name: &str) -> Result<DerivedAddress, WalletError> {
        address_ops::get_new_address(&self.storage, name)
    }

    pub fn list_addresses(&self, name: &str) -> Result<Vec<DerivedAddress>, WalletError> {
        address_ops::list_addresses(&self.storage, name)
    }

    /// Refresh balances using the endpoint that matches the wallet's own network
    pub async fn update_balances(&self, name: &str) -> Result<BalanceUpdate, WalletError> {
        let name = validate_wallet_name(name)?;
        let record = self
            .storage
            .load_wallet(name)
            .map_err(|e| WalletError::not_found(name, e))?;

        let previous_balance = record.balance;
        let provider = RestBalanceChecker::for_network(&self.config, record.network)?;
        let record = balance_ops::reconcile(&self.storage, &provider, record).await?;

        Ok(BalanceUpdate {
            previous_balance,
            record,
        })
    }

    /// Network stored in the wallet file
    pub fn wallet_network(&self, name: &str) -> Result<Network, WalletError> {
        let name = validate_wallet_name(name)?;
        self.storage
            .load_wallet(name)
            .map(|record| record.network)
            .map_err(|e| WalletError::not_found(name, e))
    }
}
