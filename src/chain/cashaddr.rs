//! CashAddr encoding
//!
//! Bitcoin Cash's current address format: a network prefix, a `:` separator,
//! and a base32 payload protected by a 40-bit BCH checksum.

use bitcoin::bech32::primitives::checksum::Checksum;
use bitcoin::bech32::primitives::iter::Checksummed;
use bitcoin::bech32::{ByteIterExt, Fe32};

/// The CashAddr BCH code over GF(32), eight check characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashAddr {}

impl Checksum for CashAddr {
    type MidstateRepr = u64;
    const CODE_LENGTH: usize = 1023;
    const CHECKSUM_LENGTH: usize = 8;
    const GENERATOR_SH: [u64; 5] = [
        0x98_f2bc_8e61,
        0x79_b76d_99e2,
        0xf3_3e5f_b3c4,
        0xae_2eab_e2a8,
        0x1e_4f43_e470,
    ];
    const TARGET_RESIDUE: u64 = 1;
}

/// Payload kind carried in the version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    P2pkh,
    P2sh,
}

impl AddressType {
    /// Version byte for a 160-bit hash: type bits in 3..7, size bits 0
    fn version_byte(self) -> u8 {
        match self {
            AddressType::P2pkh => 0x00,
            AddressType::P2sh => 0x08,
        }
    }
}

/// Encode a 20-byte hash as a CashAddr string
///
/// # Algorithm
/// 1. Prepend the version byte to the hash and regroup into 5-bit words
/// 2. Checksum (prefix low bits, 0, payload words) with the CashAddr code
/// 3. Emit the payload and checksum words after the prefix, skipping the
///    prefix words that only feed the checksum
pub fn encode(prefix: &str, kind: AddressType, hash: &[u8; 20]) -> String {
    // the low five bits of any byte always fit a field element
    let prefix_words = prefix.bytes().filter_map(|b| Fe32::try_from(b & 0x1f).ok());
    let payload = std::iter::once(kind.version_byte())
        .chain(hash.iter().copied())
        .bytes_to_fes();

    let words = prefix_words.chain(std::iter::once(Fe32::Q)).chain(payload);
    let body = Checksummed::<_, CashAddr>::new(words)
        .skip(prefix.len() + 1)
        .map(Fe32::to_char);

    let mut out = String::with_capacity(prefix.len() + 1 + 42);
    out.push_str(prefix);
    out.push(':');
    out.extend(body);
    out
}
