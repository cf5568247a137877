//! # Universal Executor (`ue`) module
//!
//! Mints the native token against deposits locked on foreign chains.
//!
//! A mint runs through six ordered steps, each of which aborts the call on
//! failure:
//!
//! 1. the foreign deposit is verified by a [`UtvVerifier`]
//! 2. the locked USD amount is converted into native base units
//!    ([`convert_usd_to_pc_tokens`])
//! 3. the UEA factory contract computes the owner's executing account
//! 4. the returned word is decoded into a native account ([`resolve_uea_account`])
//! 5. the amount is minted into the module account
//! 6. the amount is sent from the module account to the UEA
//!
//! Steps 5 and 6 are not undone by the keeper. Callers run [`Keeper::mint_pc`]
//! inside [`execute_atomic`] (as [`MsgServer`] does) so that a failed transfer
//! discards the mint together with every other state change of the message.
//!
//! Replay protection for foreign transaction hashes belongs to the verifier.
//! The keeper holds no per-hash state and mints again for every accepted
//! verification.

pub mod atomic;
pub mod bank;
pub mod config;
pub mod conversion;
pub mod error;
pub mod factory;
pub mod keeper;
pub mod msg_server;
pub mod msgs;
pub mod resolver;
pub mod types;
pub mod verifier;

#[cfg(test)]
mod test_utils;

pub use atomic::execute_atomic;
pub use bank::{BankError, BankKeeper, JournalBank};
pub use config::{ConfigError, UeConfig};
pub use conversion::{
    convert_usd_to_pc_tokens, convert_usd_to_pc_tokens_at_rate, ConversionError, USD_TO_PC_RATE,
};
pub use error::MintPcError;
pub use factory::{EvmCallError, EvmCaller, SystemCallAdapter};
pub use keeper::{Keeper, MintReceipt};
pub use msg_server::{MsgMintPcResponse, MsgServer, MsgServerError};
pub use msgs::{MsgMintPc, MsgValidationError};
pub use resolver::{resolve_uea_account, uea_address_from_return, ResolveError};
pub use types::{AccountIdError, ChainRef, UniversalAccountId, FACTORY_PROXY_ADDRESS, MODULE_NAME};
pub use verifier::{LockedFunds, UtvVerifier, VerifierError};
