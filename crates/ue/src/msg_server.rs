//! Message handlers of the module.

use crate::{
    atomic::execute_atomic,
    bank::JournalBank,
    error::MintPcError,
    factory::EvmCaller,
    keeper::{Keeper, MintReceipt},
    msgs::{MsgMintPc, MsgValidationError},
    verifier::UtvVerifier,
};
use pc_common::{AccAddress, AddressCodec};
use revm::context_interface::journaled_state::JournalTr;
use thiserror::Error;

/// Errors returned by [`MsgServer`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgServerError {
    /// The message failed stateless validation.
    #[error(transparent)]
    Validation(#[from] MsgValidationError),
    /// The signer cannot originate EVM calls.
    #[error("signer {0} is not a 20-byte account")]
    SignerNotEvm(AccAddress),
    /// The mint failed; no state was changed.
    #[error(transparent)]
    MintPc(#[from] MintPcError),
}

/// Response to [`MsgMintPc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgMintPcResponse {
    /// Details of the executed mint.
    pub receipt: MintReceipt,
}

/// Executes messages against a journal, one atomic unit per message.
#[derive(Debug)]
pub struct MsgServer<'a, V, C> {
    keeper: &'a Keeper<V, C>,
}

impl<'a, V, C> MsgServer<'a, V, C>
where
    V: UtvVerifier,
    C: AddressCodec,
{
    /// Creates a server dispatching to `keeper`.
    pub const fn new(keeper: &'a Keeper<V, C>) -> Self {
        Self { keeper }
    }

    /// Handles [`MsgMintPc`].
    ///
    /// The signer is the sender of the factory call. Ledger changes are
    /// journaled inside a checkpoint that is reverted if any step fails.
    pub fn mint_pc<J, E>(
        &self,
        journal: &mut J,
        evm: &mut E,
        msg: &MsgMintPc,
    ) -> Result<MsgMintPcResponse, MsgServerError>
    where
        J: JournalTr,
        E: EvmCaller,
    {
        let signer = msg.validate_basic(self.keeper.codec())?;
        let evm_from = signer
            .to_evm_address()
            .ok_or_else(|| MsgServerError::SignerNotEvm(signer.clone()))?;

        let base_denom = self.keeper.config().base_denom.clone();
        let receipt = execute_atomic(journal, |journal| {
            let mut bank = JournalBank::new(journal, base_denom);
            self.keeper.mint_pc(
                &mut bank,
                evm,
                evm_from,
                &msg.universal_account_id,
                &msg.tx_hash,
            )
        })?;

        Ok(MsgMintPcResponse { receipt })
    }
}
