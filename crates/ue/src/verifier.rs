//! Interface to the foreign-chain transaction verifier.

use alloy_primitives::U256;
use thiserror::Error;

/// Funds locked by a verified gateway interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedFunds {
    /// Amount locked, in the smallest unit of the foreign asset.
    pub amount: U256,
    /// Fixed-point decimals of the foreign asset.
    pub decimals: u32,
}

impl LockedFunds {
    /// Creates a locked-funds record.
    pub const fn new(amount: U256, decimals: u32) -> Self {
        Self { amount, decimals }
    }
}

/// Errors reported by a [`UtvVerifier`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The transaction was not found on the foreign chain.
    #[error("transaction {tx_hash} not found on {chain}")]
    NotFound {
        /// Foreign transaction hash.
        tx_hash: String,
        /// CAIP-2 chain the lookup ran against.
        chain: String,
    },
    /// The transaction was already consumed by an earlier mint.
    #[error("transaction {tx_hash} was already verified")]
    AlreadyVerified {
        /// Foreign transaction hash.
        tx_hash: String,
    },
    /// The transaction was not sent by the claimed owner.
    #[error("transaction sender does not match owner {owner}")]
    OwnerMismatch {
        /// Owner claimed by the caller.
        owner: String,
    },
    /// No RPC endpoint is configured for the chain.
    #[error("unsupported chain {0}")]
    UnsupportedChain(String),
    /// The foreign RPC failed.
    #[error("rpc error: {0}")]
    Rpc(String),
}

/// Verifies gateway interactions on foreign chains.
///
/// Implementations are responsible for replay protection: once a transaction
/// hash has been accepted for a mint, verifying it again must fail with
/// [`VerifierError::AlreadyVerified`]. The keeper does not deduplicate hashes
/// and will mint once per successful verification.
pub trait UtvVerifier {
    /// Verifies that `owner` locked funds in `tx_hash` on chain `chain`
    /// (CAIP-2) and returns the locked amount.
    fn verify_and_get_locked_funds(
        &self,
        owner: &str,
        tx_hash: &str,
        chain: &str,
    ) -> Result<LockedFunds, VerifierError>;
}

impl<T: UtvVerifier + ?Sized> UtvVerifier for &T {
    fn verify_and_get_locked_funds(
        &self,
        owner: &str,
        tx_hash: &str,
        chain: &str,
    ) -> Result<LockedFunds, VerifierError> {
        (**self).verify_and_get_locked_funds(owner, tx_hash, chain)
    }
}

impl<T: UtvVerifier + ?Sized> UtvVerifier for std::sync::Arc<T> {
    fn verify_and_get_locked_funds(
        &self,
        owner: &str,
        tx_hash: &str,
        chain: &str,
    ) -> Result<LockedFunds, VerifierError> {
        (**self).verify_and_get_locked_funds(owner, tx_hash, chain)
    }
}
