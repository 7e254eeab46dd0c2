/// Balance query operations
///
/// Re-derives every issued address, polls its balance and rewrites the
/// aggregate stored in the wallet file.

use bitcoin::{Amount, SignedAmount};

use super::address_manager::AddressManager;
use super::address_ops::validate_wallet_name;
use crate::chain::{AddressBalance, BalanceProvider};
use crate::error::WalletError;
use crate::storage::{confirmed_subunits, AddressBalanceEntry, Storage, WalletRecord};

/// Provider answer for one derived address
#[derive(Debug, Clone, PartialEq)]
pub struct AddressData {
    pub index: u32,
    pub address: String,
    pub balance: AddressBalance,
}

/// Poll every issued address of a wallet and persist the new balances
pub async fn update_balances<P>(
    storage: &Storage,
    provider: &P,
    wallet_name: &str,
) -> Result<WalletRecord, WalletError>
where
    P: BalanceProvider + ?Sized,
{
    let name = validate_wallet_name(wallet_name)?;
    let record = storage
        .load_wallet(name)
        .map_err(|e| WalletError::not_found(name, e))?;

    reconcile(storage, provider, record).await
}

/// Recompute `balance` and `hasBalance` for an already loaded record
///
/// Nothing is written unless every address was queried successfully.
pub async fn reconcile<P>(
    storage: &Storage,
    provider: &P,
    mut record: WalletRecord,
) -> Result<WalletRecord, WalletError>
where
    P: BalanceProvider + ?Sized,
{
    let address_data = get_address_data(&record, provider).await?;
    let has_balance = generate_has_balance(&address_data);
    let balance = sum_confirmed_balances(&has_balance)?;

    log::info!(
        "Wallet '{}': {} of {} address(es) hold funds",
        record.name,
        has_balance.len(),
        address_data.len()
    );

    record.balance = balance;
    record.has_balance = has_balance;

    storage
        .save_wallet(&record.name, &record)
        .map_err(|e| WalletError::store_write(&record.name, e))?;

    Ok(record)
}

/// Query the provider for indices `0..next_address`, one at a time, in order
pub async fn get_address_data<P>(
    record: &WalletRecord,
    provider: &P,
) -> Result<Vec<AddressData>, WalletError>
where
    P: BalanceProvider + ?Sized,
{
    let manager = AddressManager::for_wallet(record)?;
    let mut data = Vec::with_capacity(record.next_address as usize);

    for index in 0..record.next_address {
        let derived = manager.derive_address(index)?;
        let balance = provider.get_balance(&derived.address).await?;

        log::debug!(
            "#{} {}: confirmed {} sat, unconfirmed {} sat",
            index,
            derived.address,
            balance.confirmed_subunits,
            balance.unconfirmed_subunits
        );

        data.push(AddressData {
            index,
            address: derived.address,
            balance,
        });
    }

    Ok(data)
}

/// Keep addresses with a non-zero confirmed or unconfirmed balance
///
/// Display amounts are rebuilt from the subunit values so the two can never disagree.
pub fn generate_has_balance(address_data: &[AddressData]) -> Vec<AddressBalanceEntry> {
    address_data
        .iter()
        .filter(|data| !data.balance.is_empty())
        .map(|data| AddressBalanceEntry {
            index: data.index,
            balance: Amount::from_sat(data.balance.confirmed_subunits).to_btc(),
            balance_subunits: data.balance.confirmed_subunits,
            unconfirmed_balance: SignedAmount::from_sat(data.balance.unconfirmed_subunits).to_btc(),
            unconfirmed_balance_subunits: data.balance.unconfirmed_subunits,
            address: data.address.clone(),
        })
        .collect()
}

/// Total confirmed balance in BCH, summed in satoshis
pub fn sum_confirmed_balances(has_balance: &[AddressBalanceEntry]) -> Result<f64, WalletError> {
    let total = confirmed_subunits(has_balance)
        .ok_or_else(|| WalletError::provider("confirmed balance total overflows u64"))?;

    Ok(Amount::from_sat(total).to_btc())
}
