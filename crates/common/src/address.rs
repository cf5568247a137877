//! Native account addresses.

use crate::{codec::encode_bech32, ACCOUNT_ADDRESS_PREFIX};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Raw bytes identifying an account on the native chain.
///
/// User accounts are 20 bytes long and share their bytes with the EVM address
/// of the same key. Contract-derived accounts may be 32 bytes long.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    /// Wraps raw account bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw account bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` if the address holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the EVM view of this account, if it is 20 bytes long.
    pub fn to_evm_address(&self) -> Option<Address> {
        <[u8; 20]>::try_from(self.0.as_slice())
            .ok()
            .map(Address::from)
    }
}

impl From<Address> for AccAddress {
    fn from(address: Address) -> Self {
        Self(address.to_vec())
    }
}

impl AsRef<[u8]> for AccAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode_bech32(ACCOUNT_ADDRESS_PREFIX, &self.0) {
            Ok(encoded) => f.write_str(&encoded),
            Err(_) => write!(f, "0x{}", hex::encode(&self.0)),
        }
    }
}

impl fmt::Debug for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccAddress(0x{})", hex::encode(&self.0))
    }
}

/// Derives the account owned by a module: the first 20 bytes of
/// `sha256(module_name)`.
pub fn module_address(module_name: &str) -> AccAddress {
    let hash = Sha256::digest(module_name.as_bytes());
    AccAddress::new(&hash[..20])
}
