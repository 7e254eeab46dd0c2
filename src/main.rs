use bch_wallet::commands::{self, Cli};
use bch_wallet::{WalletConfig, WalletManager};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger (set RUST_LOG=debug for per-address balance output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let manager = WalletManager::new(WalletConfig::from_env());

    // Failures are reported, not propagated: the process exits normally either way
    if let Err(e) = commands::execute(cli.command, &manager).await {
        eprintln!("Error: {}", e);
    }

    Ok(())
}
