//! Data models for wallet storage

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chain::Network;

/// The `<name>.json` wallet file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// Storage key; overwritten with the load key when read from disk
    #[serde(default)]
    pub name: String,
    pub network: Network,
    pub mnemonic: String,
    /// Index of the next receive address to hand out
    pub next_address: u32,
    /// Aggregate confirmed balance in BCH, recomputed on every refresh
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub has_balance: Vec<AddressBalanceEntry>,
    /// Keys written by other tools, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WalletRecord {
    /// A fresh record with no issued addresses
    pub fn new(name: impl Into<String>, network: Network, mnemonic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network,
            mnemonic: mnemonic.into(),
            next_address: 0,
            balance: 0.0,
            has_balance: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Confirmed total in satoshis, `None` on overflow
    pub fn balance_subunits(&self) -> Option<u64> {
        confirmed_subunits(&self.has_balance)
    }
}

/// Sum of confirmed satoshis across entries, `None` on overflow
pub fn confirmed_subunits(entries: &[AddressBalanceEntry]) -> Option<u64> {
    entries
        .iter()
        .try_fold(0u64, |acc, entry| acc.checked_add(entry.balance_subunits))
}

/// A derived address holding funds at the last refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBalanceEntry {
    pub index: u32,
    pub balance: f64,
    #[serde(alias = "balanceSat")]
    pub balance_subunits: u64,
    pub unconfirmed_balance: f64,
    #[serde(alias = "unconfirmedBalanceSat")]
    pub unconfirmed_balance_subunits: i64,
    #[serde(alias = "cashAddress")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_fills_defaults() {
        let json = r#"{
            "network": "testnet",
            "mnemonic": "abandon abandon abandon",
            "nextAddress": 4
        }"#;
        let record: WalletRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.network, Network::Testnet);
        assert_eq!(record.next_address, 4);
        assert_eq!(record.balance, 0.0);
        assert!(record.has_balance.is_empty());
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_legacy_entry_keys_are_accepted() {
        let json = r#"{
            "index": 2,
            "balance": 0.001,
            "balanceSat": 100000,
            "unconfirmedBalance": 0,
            "unconfirmedBalanceSat": 0,
            "cashAddress": "bitcoincash:qqabc"
        }"#;
        let entry: AddressBalanceEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.balance_subunits, 100_000);
        assert_eq!(entry.address, "bitcoincash:qqabc");

        let written = serde_json::to_value(&entry).unwrap();
        assert_eq!(written["balanceSubunits"], 100_000);
        assert_eq!(written["address"], "bitcoincash:qqabc");
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let json = r#"{
            "network": "mainnet",
            "mnemonic": "m",
            "nextAddress": 0,
            "rootAddress": "bitcoincash:qqroot"
        }"#;
        let record: WalletRecord = serde_json::from_str(json).unwrap();
        let written = serde_json::to_value(&record).unwrap();

        assert_eq!(written["rootAddress"], "bitcoincash:qqroot");
        assert_eq!(written["nextAddress"], 0);
    }

    fn entry(index: u32, sats: u64) -> AddressBalanceEntry {
        AddressBalanceEntry {
            index,
            balance: 0.0,
            balance_subunits: sats,
            unconfirmed_balance: 0.0,
            unconfirmed_balance_subunits: 0,
            address: format!("bitcoincash:qq{}", index),
        }
    }

    #[test]
    fn test_balance_subunits_overflow_is_none() {
        let mut record = WalletRecord::new("big", Network::Mainnet, "m");
        record.has_balance = vec![entry(0, 40_000), entry(1, 2_000)];
        assert_eq!(record.balance_subunits(), Some(42_000));

        record.has_balance = vec![entry(0, u64::MAX / 2 + 1), entry(1, u64::MAX / 2 + 1)];
        assert_eq!(record.balance_subunits(), None);
    }

    #[test]
    fn test_missing_mnemonic_is_rejected() {
        let json = r#"{ "network": "mainnet", "nextAddress": 0 }"#;
        assert!(serde_json::from_str::<WalletRecord>(json).is_err());
    }
}
