/// Address management operations
///
/// Handles receive-address generation and listing.

use super::address_manager::{AddressManager, DerivedAddress};
use crate::error::WalletError;
use crate::storage::Storage;

/// Past this many issued addresses, refreshes get slow enough to suggest a new wallet
pub const CONSOLIDATION_THRESHOLD: u32 = 100;

/// Reject empty names and names that would escape the wallet directory
pub fn validate_wallet_name(name: &str) -> Result<&str, WalletError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(WalletError::Validation(
            "You must specify a wallet with the -n flag".to_string(),
        ));
    }
    if name.contains(|c| c == '/' || c == '\\') || name.starts_with('.') {
        return Err(WalletError::Validation(format!(
            "'{}' is not a valid wallet file name",
            name
        )));
    }
    Ok(name)
}

pub fn needs_consolidation(next_address: u32) -> bool {
    next_address > CONSOLIDATION_THRESHOLD
}

/// Warning text for a wallet whose counter has passed the threshold
pub fn consolidation_advisory(wallet_name: &str, next_address: u32) -> Option<String> {
    needs_consolidation(next_address).then(|| {
        format!(
            "Over {} addresses have been generated with wallet '{}'. Consider consolidating \
             it into a new wallet to reduce the time spent tracking every address.",
            CONSOLIDATION_THRESHOLD, wallet_name
        )
    })
}

/// Hand out the next receive address and advance the wallet counter
///
/// The counter is persisted before the address is encoded and returned, so a
/// caller that crashes afterwards never sees the same index twice.
pub fn get_new_address(storage: &Storage, wallet_name: &str) -> Result<DerivedAddress, WalletError> {
    let name = validate_wallet_name(wallet_name)?;
    let mut record = storage
        .load_wallet(name)
        .map_err(|e| WalletError::not_found(name, e))?;

    let manager = AddressManager::for_wallet(&record)?;
    let index = record.next_address;
    let leaf = manager.derive_leaf(index)?;

    record.next_address = index
        .checked_add(1)
        .ok_or_else(|| WalletError::provider("address counter exhausted"))?;

    if let Some(advisory) = consolidation_advisory(name, record.next_address) {
        log::warn!("{}", advisory);
    }

    storage
        .save_wallet(name, &record)
        .map_err(|e| WalletError::store_write(name, e))?;
    log::info!("Wallet '{}' issued address #{}", name, index);

    Ok(manager.encode_address(index, &leaf))
}

/// Re-derive every address the wallet has issued, without touching the file
pub fn list_addresses(storage: &Storage, wallet_name: &str) -> Result<Vec<DerivedAddress>, WalletError> {
    let name = validate_wallet_name(wallet_name)?;
    let record = storage
        .load_wallet(name)
        .map_err(|e| WalletError::not_found(name, e))?;

    AddressManager::for_wallet(&record)?.derive_addresses(0, record.next_address)
}
