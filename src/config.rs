/// Wallet configuration from environment variables
///
/// Controls where wallet files live and which balance endpoint each network uses.
/// Defaults point at `./wallets` and the public bitcoin.com REST API.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::chain::Network;

const DEFAULT_WALLETS_DIR: &str = "./wallets";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Directory holding `<name>.json` wallet files
    pub wallets_dir: PathBuf,
    /// Balance REST endpoint for mainnet wallets
    pub mainnet_rest_url: String,
    /// Balance REST endpoint for testnet wallets
    pub testnet_rest_url: String,
    /// Per-request timeout for balance lookups
    pub request_timeout: Duration,
}

impl WalletConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `WALLETS_DIR`: wallet file directory (default `./wallets`)
    /// - `BCH_REST_URL`: mainnet REST endpoint
    /// - `BCH_TESTNET_REST_URL`: testnet REST endpoint
    /// - `BCH_REST_TIMEOUT_SECS`: request timeout in seconds (default 30)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Point testnet wallets at a local indexer
    /// BCH_TESTNET_REST_URL=http://localhost:3000/v1/ bch-wallet update-balances -n demo
    /// ```
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let wallets_dir = env::var("WALLETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.wallets_dir);

        let mainnet_rest_url =
            env::var("BCH_REST_URL").unwrap_or(defaults.mainnet_rest_url);
        let testnet_rest_url =
            env::var("BCH_TESTNET_REST_URL").unwrap_or(defaults.testnet_rest_url);

        let request_timeout = match env::var("BCH_REST_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    log::warn!(
                        "Ignoring invalid BCH_REST_TIMEOUT_SECS '{}', using {}s",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    defaults.request_timeout
                }
            },
            Err(_) => defaults.request_timeout,
        };

        log::debug!("Wallet directory: {}", wallets_dir.display());
        log::debug!("Mainnet REST URL: {}", mainnet_rest_url);
        log::debug!("Testnet REST URL: {}", testnet_rest_url);

        Self {
            wallets_dir,
            mainnet_rest_url,
            testnet_rest_url,
            request_timeout,
        }
    }

    /// Balance endpoint for the given network
    pub fn rest_url(&self, network: Network) -> &str {
        match network {
            Network::Mainnet => &self.mainnet_rest_url,
            Network::Testnet => &self.testnet_rest_url,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            wallets_dir: PathBuf::from(DEFAULT_WALLETS_DIR),
            mainnet_rest_url: Network::Mainnet.default_rest_url().to_string(),
            testnet_rest_url: Network::Testnet.default_rest_url().to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
