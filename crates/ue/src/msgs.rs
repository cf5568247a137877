//! Messages accepted by the module.

use crate::types::{AccountIdError, UniversalAccountId};
use pc_common::{AccAddress, AddressCodec, AddressCodecError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stateless validation failures of a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgValidationError {
    /// The signer address does not decode.
    #[error("invalid signer address: {0}")]
    InvalidSigner(#[source] AddressCodecError),
    /// The universal account identity is malformed.
    #[error("invalid universal account id: {0}")]
    InvalidAccountId(#[from] AccountIdError),
    /// No foreign transaction hash was given.
    #[error("tx hash cannot be empty")]
    EmptyTxHash,
}

/// Requests a mint for a gateway deposit made on a foreign chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMintPc {
    /// Account submitting the message, bech32 or `0x` hex.
    pub signer: String,
    /// Identity of the depositor on the foreign chain.
    pub universal_account_id: UniversalAccountId,
    /// Hash of the gateway interaction on the foreign chain.
    pub tx_hash: String,
}

impl MsgMintPc {
    /// Checks the message without touching state and returns the decoded signer.
    pub fn validate_basic<C: AddressCodec + ?Sized>(
        &self,
        codec: &C,
    ) -> Result<AccAddress, MsgValidationError> {
        let signer = codec
            .to_account(&self.signer)
            .map_err(MsgValidationError::InvalidSigner)?;
        self.universal_account_id.validate()?;
        if self.tx_hash.trim().is_empty() {
            return Err(MsgValidationError::EmptyTxHash);
        }
        Ok(signer)
    }
}
