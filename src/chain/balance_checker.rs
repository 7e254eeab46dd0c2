use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::network::Network;
use crate::config::WalletConfig;
use crate::error::WalletError;

/// Balance of a single address as reported by the chain provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBalance {
    /// Confirmed balance in BCH
    pub confirmed: f64,
    pub confirmed_subunits: u64,
    /// Pending balance in BCH; negative while an unconfirmed spend is in flight
    pub unconfirmed: f64,
    pub unconfirmed_subunits: i64,
}

impl AddressBalance {
    pub fn is_empty(&self) -> bool {
        self.confirmed_subunits == 0 && self.unconfirmed_subunits == 0
    }
}

/// Source of per-address balances
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    async fn get_balance(&self, address: &str) -> Result<AddressBalance, WalletError>;
}

/// `address/details` response body. Only the balance fields are read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressDetails {
    balance: f64,
    balance_sat: u64,
    unconfirmed_balance: f64,
    unconfirmed_balance_sat: i64,
}

impl From<AddressDetails> for AddressBalance {
    fn from(details: AddressDetails) -> Self {
        Self {
            confirmed: details.balance,
            confirmed_subunits: details.balance_sat,
            unconfirmed: details.unconfirmed_balance,
            unconfirmed_subunits: details.unconfirmed_balance_sat,
        }
    }
}

/// Balance lookups against a bitcoin.com-style REST API
pub struct RestBalanceChecker {
    client: reqwest::Client,
    base_url: String,
}

impl RestBalanceChecker {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::provider(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build a checker pointed at the configured endpoint for `network`
    pub fn for_network(config: &WalletConfig, network: Network) -> Result<Self, WalletError> {
        let url = config.rest_url(network);
        log::debug!("Using {} balance endpoint {}", network, url);
        Self::new(url, config.request_timeout)
    }

    fn details_url(&self, address: &str) -> String {
        format!(
            "{}/address/details/{}",
            self.base_url.trim_end_matches('/'),
            address
        )
    }
}

#[async_trait]
impl BalanceProvider for RestBalanceChecker {
    async fn get_balance(&self, address: &str) -> Result<AddressBalance, WalletError> {
        let url = self.details_url(address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WalletError::provider(format!("{}: {}", address, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WalletError::provider(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let details: AddressDetails = response
            .json()
            .await
            .map_err(|e| WalletError::provider(format!("{}: {}", address, e)))?;

        Ok(details.into())
    }
}
