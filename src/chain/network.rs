//! Network selection
//!
//! A wallet record picks its network once; everything network-dependent
//! (key version bytes, address prefix, REST endpoint) hangs off this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BIP44 purpose field
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-44 coin type for Bitcoin Cash, used on both networks
pub const COIN_TYPE: u32 = 145;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Map the CLI `--testnet` switch onto a network
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Network parameters for BIP32 key serialization and legacy addresses
    pub fn bitcoin_network(self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
        }
    }

    /// Human-readable part of a CashAddr string
    pub fn cashaddr_prefix(self) -> &'static str {
        match self {
            Network::Mainnet => "bitcoincash",
            Network::Testnet => "bchtest",
        }
    }

    /// Default balance REST endpoint
    pub fn default_rest_url(self) -> &'static str {
        match self {
            Network::Mainnet => "https://rest.bitcoin.com/v1/",
            Network::Testnet => "https://trest.bitcoin.com/v1/",
        }
    }

    /// Account-level derivation path: m/44'/145'/0'
    pub fn account_path(self) -> String {
        format!("m/{}'/{}'/0'", BIP44_PURPOSE, COIN_TYPE)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
