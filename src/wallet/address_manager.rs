use bip39::Mnemonic;
use bitcoin::bip32::{ChildNumber, DerivationPath, Xpriv, Xpub};
use bitcoin::hashes::Hash;
use bitcoin::key::CompressedPublicKey;
use bitcoin::secp256k1::{All, Secp256k1};
use bitcoin::Address;
use std::str::FromStr;

use crate::chain::cashaddr::{self, AddressType};
use crate::chain::Network;
use crate::error::WalletError;
use crate::storage::WalletRecord;

/// BIP44 change level used for receive addresses
const EXTERNAL_CHAIN: u32 = 0;

/// A receive address at a known index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAddress {
    pub index: u32,
    /// CashAddr form, e.g. `bitcoincash:qq...`
    pub address: String,
    /// Base58 P2PKH form of the same key
    pub legacy_address: String,
}

/// Derives receive addresses for one wallet
///
/// Holds the account node `m/44'/145'/0'` so that scanning many indices
/// only pays for the last two derivation steps each time.
pub struct AddressManager {
    secp: Secp256k1<All>,
    account: Xpriv,
    network: Network,
}

impl AddressManager {
    pub fn new(mnemonic: &str, network: Network) -> Result<Self, WalletError> {
        let secp = Secp256k1::new();
        let master = Self::master_key(mnemonic, network)?;

        let account_path = DerivationPath::from_str(&network.account_path())
            .map_err(|e| WalletError::provider(e.to_string()))?;
        let account = Self::derive_path(&secp, &master, &account_path)?;

        Ok(Self {
            secp,
            account,
            network,
        })
    }

    pub fn for_wallet(record: &WalletRecord) -> Result<Self, WalletError> {
        Self::new(&record.mnemonic, record.network)
    }

    /// Master node for a mnemonic, with the network's key version bytes
    pub fn master_key(mnemonic: &str, network: Network) -> Result<Xpriv, WalletError> {
        let mnemonic = Mnemonic::parse(mnemonic.trim())
            .map_err(|e| WalletError::provider(format!("Invalid mnemonic: {}", e)))?;
        let seed = mnemonic.to_seed("");

        Xpriv::new_master(network.bitcoin_network(), &seed)
            .map_err(|e| WalletError::provider(e.to_string()))
    }

    /// Derive `path` below `node`; hardened steps are allowed
    pub fn derive_path(
        secp: &Secp256k1<All>,
        node: &Xpriv,
        path: &DerivationPath,
    ) -> Result<Xpriv, WalletError> {
        node.derive_priv(secp, path)
            .map_err(|e| WalletError::provider(e.to_string()))
    }

    /// Key node at `account/0/index`
    pub fn derive_leaf(&self, index: u32) -> Result<Xpriv, WalletError> {
        let path: DerivationPath = vec![
            ChildNumber::from_normal_idx(EXTERNAL_CHAIN)
                .map_err(|e| WalletError::provider(e.to_string()))?,
            ChildNumber::from_normal_idx(index)
                .map_err(|e| WalletError::provider(e.to_string()))?,
        ]
        .into();

        Self::derive_path(&self.secp, &self.account, &path)
    }

    /// Encode a leaf node as CashAddr plus its legacy twin
    pub fn encode_address(&self, index: u32, node: &Xpriv) -> DerivedAddress {
        let xpub = Xpub::from_priv(&self.secp, node);
        let pubkey = CompressedPublicKey(xpub.public_key);
        let hash = pubkey.pubkey_hash();

        let address = cashaddr::encode(
            self.network.cashaddr_prefix(),
            AddressType::P2pkh,
            &hash.to_byte_array(),
        );
        let legacy_address = Address::p2pkh(hash, self.network.bitcoin_network()).to_string();

        DerivedAddress {
            index,
            address,
            legacy_address,
        }
    }

    pub fn derive_address(&self, index: u32) -> Result<DerivedAddress, WalletError> {
        let leaf = self.derive_leaf(index)?;
        Ok(self.encode_address(index, &leaf))
    }

    /// Derive `count` consecutive addresses starting at `start`
    pub fn derive_addresses(
        &self,
        start: u32,
        count: u32,
    ) -> Result<Vec<DerivedAddress>, WalletError> {
        let mut addresses = Vec::with_capacity(count as usize);

        for i in 0..count {
            let index = start
                .checked_add(i)
                .ok_or_else(|| WalletError::provider("address index overflow"))?;
            addresses.push(self.derive_address(index)?);
        }

        Ok(addresses)
    }
}
