//! Native-chain primitives shared by the pchain EVM modules.
//!
//! Accounts on the native side are raw byte strings rendered as bech32 with
//! the [`ACCOUNT_ADDRESS_PREFIX`] human-readable part. EVM addresses map onto
//! them one-to-one through [`AccAddress::from`].

pub mod address;
pub mod codec;
pub mod coin;
pub mod constants;

pub use address::{module_address, AccAddress};
pub use codec::{decode_bech32, encode_bech32, AddressCodec, AddressCodecError, AnyAddressCodec};
pub use coin::Coin;
pub use constants::*;
