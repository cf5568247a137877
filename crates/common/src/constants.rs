//! Chain-wide constants.

/// Base denomination of the native token (18 decimals).
pub const BASE_DENOM: &str = "upc";

/// Number of decimals of [`BASE_DENOM`].
pub const BASE_DENOM_DECIMALS: u32 = 18;

/// Bech32 human-readable prefix of native account addresses.
pub const ACCOUNT_ADDRESS_PREFIX: &str = "push";
