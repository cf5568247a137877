//! Conversion of locked USD amounts into native base units.

use alloy_primitives::U256;
use pc_common::BASE_DENOM_DECIMALS;
use thiserror::Error;

/// Native tokens minted per locked USD.
pub const USD_TO_PC_RATE: u64 = 10;

/// Errors returned by [`convert_usd_to_pc_tokens`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The foreign asset has more decimals than the native token.
    #[error("usd decimals {decimals} exceed the 18 native decimals")]
    InvalidDecimals {
        /// Decimals reported for the foreign asset.
        decimals: u32,
    },
    /// The scaled amount does not fit into 256 bits.
    #[error("converted amount overflows 256 bits")]
    Overflow,
}

/// Converts `usd_amount` (fixed-point with `usd_decimals` decimals) into base
/// units of the native token at [`USD_TO_PC_RATE`].
///
/// `result = usd_amount * rate * 10^(18 - usd_decimals)`
pub fn convert_usd_to_pc_tokens(usd_amount: U256, usd_decimals: u32) -> Result<U256, ConversionError> {
    convert_usd_to_pc_tokens_at_rate(usd_amount, usd_decimals, U256::from(USD_TO_PC_RATE))
}

/// Same as [`convert_usd_to_pc_tokens`] with an explicit conversion rate.
pub fn convert_usd_to_pc_tokens_at_rate(
    usd_amount: U256,
    usd_decimals: u32,
    rate: U256,
) -> Result<U256, ConversionError> {
    let exponent = BASE_DENOM_DECIMALS
        .checked_sub(usd_decimals)
        .ok_or(ConversionError::InvalidDecimals {
            decimals: usd_decimals,
        })?;
    // At most 10^18.
    let scale = U256::from(10u64).pow(U256::from(exponent));

    usd_amount
        .checked_mul(rate)
        .and_then(|amount| amount.checked_mul(scale))
        .ok_or(ConversionError::Overflow)
}
