//! Conversion of user-supplied address strings into native account bytes.
//!
//! Two textual forms are accepted:
//!
//! - `0x`-prefixed hex, exactly 20 bytes (EVM form)
//! - bech32 with any human-readable prefix, 20 or 32 bytes of payload

use crate::AccAddress;
use alloy_primitives::Address;
use bech32::{FromBase32, ToBase32, Variant};
use std::str::FromStr;
use thiserror::Error;

/// Errors returned while converting an address string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressCodecError {
    /// The input was empty or whitespace.
    #[error("empty address string")]
    Empty,
    /// The input looked like hex but did not parse as a 20-byte address.
    #[error("invalid hex address: {0}")]
    InvalidHex(String),
    /// The input did not decode as bech32.
    #[error("invalid bech32 address: {0}")]
    InvalidBech32(String),
    /// The decoded payload has an unsupported length.
    #[error("invalid address length: expected 20 or 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// Converts an address string into the native account encoding.
pub trait AddressCodec {
    /// Parses `address` and returns the account bytes it names.
    fn to_account(&self, address: &str) -> Result<AccAddress, AddressCodecError>;
}

/// Codec accepting both EVM hex and bech32 address strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyAddressCodec;

impl AddressCodec for AnyAddressCodec {
    fn to_account(&self, address: &str) -> Result<AccAddress, AddressCodecError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AddressCodecError::Empty);
        }

        if address.starts_with("0x") {
            return Address::from_str(address)
                .map(AccAddress::from)
                .map_err(|err| AddressCodecError::InvalidHex(err.to_string()));
        }

        decode_bech32(address).map(|(_, account)| account)
    }
}

/// Decodes a bech32 address, returning its prefix and payload.
pub fn decode_bech32(address: &str) -> Result<(String, AccAddress), AddressCodecError> {
    let (hrp, data, _variant) = bech32::decode(address)
        .map_err(|err| AddressCodecError::InvalidBech32(err.to_string()))?;
    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|err| AddressCodecError::InvalidBech32(err.to_string()))?;

    if bytes.len() != 20 && bytes.len() != 32 {
        return Err(AddressCodecError::InvalidLength(bytes.len()));
    }

    Ok((hrp, AccAddress::new(bytes)))
}

/// Encodes raw bytes as a bech32 string with the given prefix.
pub fn encode_bech32(hrp: &str, bytes: &[u8]) -> Result<String, AddressCodecError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|err| AddressCodecError::InvalidBech32(err.to_string()))
}
