//! CLI command implementations.

use clap::{Parser, Subcommand};

use crate::chain::Network;
use crate::error::WalletError;
use crate::wallet::WalletManager;

/// Main CLI.
#[derive(Parser, Debug)]
#[command(name = "bch-wallet")]
#[command(about = "HD receive addresses and balance tracking for Bitcoin Cash wallet files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new address to receive BCH
    GetAddress {
        /// Name of wallet
        #[arg(short, long)]
        name: Option<String>,

        /// Expect a testnet wallet
        #[arg(short, long)]
        testnet: bool,
    },

    /// Poll the network and update the balances of the wallet
    UpdateBalances {
        /// Name of wallet
        #[arg(short, long)]
        name: Option<String>,

        /// Expect a testnet wallet
        #[arg(short, long)]
        testnet: bool,
    },

    /// List every receive address the wallet has issued
    ListAddresses {
        /// Name of wallet
        #[arg(short, long)]
        name: Option<String>,

        /// Expect a testnet wallet
        #[arg(short, long)]
        testnet: bool,
    },
}

/// Run one command, printing its result to stdout
pub async fn execute(command: Commands, manager: &WalletManager) -> Result<(), WalletError> {
    match command {
        Commands::GetAddress { name, testnet } => {
            let name = name.unwrap_or_default();
            let address = manager.get_new_address(&name)?;
            check_network_flag(manager, &name, testnet);

            println!("{}", address.address);
        }
        Commands::UpdateBalances { name, testnet } => {
            let name = name.unwrap_or_default();
            let update = manager.update_balances(&name).await?;
            check_network_flag(manager, &name, testnet);

            println!("Existing balance: {} BCH", update.previous_balance);
            println!("Updated balance: {} BCH", update.record.balance);
        }
        Commands::ListAddresses { name, testnet } => {
            let name = name.unwrap_or_default();
            let addresses = manager.list_addresses(&name)?;
            check_network_flag(manager, &name, testnet);

            if addresses.is_empty() {
                println!("No addresses issued yet");
            }
            for derived in addresses {
                println!("{:>4}  {}  {}", derived.index, derived.address, derived.legacy_address);
            }
        }
    }

    Ok(())
}

/// The wallet file decides the network; a conflicting flag only earns a warning
fn check_network_flag(manager: &WalletManager, name: &str, testnet: bool) {
    let requested = Network::from_testnet_flag(testnet);
    if requested != Network::Testnet {
        return;
    }
    if let Ok(actual) = manager.wallet_network(name) {
        if actual != requested {
            log::warn!(
                "--testnet was given but wallet '{}' is a {} wallet; using {}",
                name.trim(),
                actual,
                actual
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_address() {
        let cli = Cli::try_parse_from(["bch-wallet", "get-address", "-n", "savings"]).unwrap();
        match cli.command {
            Commands::GetAddress { name, testnet } => {
                assert_eq!(name.as_deref(), Some("savings"));
                assert!(!testnet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_balances_with_testnet() {
        let cli = Cli::try_parse_from([
            "bch-wallet",
            "update-balances",
            "--name",
            "t1",
            "--testnet",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::UpdateBalances { testnet: true, .. }
        ));
    }

    #[test]
    fn test_name_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["bch-wallet", "get-address"]).unwrap();
        assert!(matches!(cli.command, Commands::GetAddress { name: None, .. }));
    }

    #[tokio::test]
    async fn test_missing_name_reports_validation_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = crate::config::WalletConfig {
            wallets_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let manager = WalletManager::new(config);

        let err = execute(
            Commands::GetAddress {
                name: None,
                testnet: false,
            },
            &manager,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, WalletError::Validation(_)));
    }
}
