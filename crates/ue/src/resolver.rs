//! Decoding of the factory's return word into a native account.

use alloy_primitives::Address;
use pc_common::{AccAddress, AddressCodec, AddressCodecError};
use thiserror::Error;

/// Errors returned while resolving a UEA from call output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The return data is too short to hold an address.
    #[error("malformed return data: expected at least 20 bytes, got {len}")]
    MalformedReturnData {
        /// Length of the return data.
        len: usize,
    },
    /// The address could not be converted to a native account.
    #[error("failed to convert EVM address to native account: {0}")]
    AddressConversion(#[from] AddressCodecError),
}

/// Extracts the address held in the trailing 20 bytes of `ret`.
///
/// An ABI-encoded `address` return value is a 32-byte word with the address
/// right-aligned. Only the length is checked; leading bytes are not required
/// to be zero.
pub fn uea_address_from_return(ret: &[u8]) -> Result<Address, ResolveError> {
    ret.last_chunk::<20>()
        .map(|bytes| Address::from(*bytes))
        .ok_or(ResolveError::MalformedReturnData { len: ret.len() })
}

/// Resolves the native account of the UEA named by `ret`.
pub fn resolve_uea_account<C: AddressCodec + ?Sized>(
    codec: &C,
    ret: &[u8],
) -> Result<(Address, AccAddress), ResolveError> {
    let uea = uea_address_from_return(ret)?;
    let account = codec.to_account(&uea.to_string())?;
    Ok((uea, account))
}
