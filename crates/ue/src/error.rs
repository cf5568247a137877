use crate::{bank::BankError, factory::EvmCallError, verifier::VerifierError};
use pc_common::AddressCodecError;
use thiserror::Error;

/// Failure of a verified mint. Each variant names the step that failed.
///
/// Every variant except [`MintPcError::MintFailed`] and
/// [`MintPcError::TransferFailed`] is raised before the ledger is touched.
/// [`MintPcError::TransferFailed`] is reported after the mint has been applied;
/// the enclosing transaction must be reverted to discard it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MintPcError {
    /// The foreign deposit could not be verified.
    #[error("failed to verify gateway interaction transaction: {0}")]
    VerificationFailed(#[source] VerifierError),
    /// The verified asset reports more decimals than the native token.
    #[error("invalid usd decimals {decimals}: at most 18 are supported")]
    InvalidDecimals {
        /// Decimals reported by the verifier.
        decimals: u32,
    },
    /// The converted amount does not fit the ledger's amount type.
    #[error("converted mint amount overflows")]
    ConversionOverflow,
    /// The factory call computing the UEA failed.
    #[error("failed to compute UEA address: {0}")]
    AddressComputationFailed(#[source] EvmCallError),
    /// The factory returned fewer than 20 bytes.
    #[error("malformed factory return data: expected at least 20 bytes, got {len}")]
    MalformedReturnData {
        /// Length of the returned data.
        len: usize,
    },
    /// The UEA address could not be converted to a native account.
    #[error("failed to convert EVM address to native account: {0}")]
    AddressConversion(#[source] AddressCodecError),
    /// Minting into the module account failed.
    #[error("failed to mint coins: {0}")]
    MintFailed(#[source] BankError),
    /// Sending the minted coins to the UEA failed. The mint has been applied.
    #[error("failed to send coins from module to account: {0}")]
    TransferFailed(#[source] BankError),
}
