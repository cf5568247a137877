//! Calls into the UEA factory contract.
//!
//! The factory derives a universal executing account (UEA) from a
//! [`UniversalAccountId`]. The keeper only needs the read-only
//! `computeUEA` view, executed without committing state.

use crate::types::{AccountIdError, UniversalAccountId};
use alloy::{sol, sol_types::SolCall};
use alloy_evm::Evm;
use alloy_primitives::{Address, Bytes};
use revm::context::result::{ExecutionResult, ResultAndState};
use thiserror::Error;

sol! {
    /// Universal account identity in the layout the factory expects.
    struct UniversalAccount {
        string chainNamespace;
        string chainId;
        bytes owner;
    }

    /// Deterministic factory of universal executing accounts.
    interface IUEAFactory {
        /// Returns the UEA address for `_id`, deployed or not.
        function computeUEA(UniversalAccount memory _id) external view returns (address);
    }
}

/// Errors raised by an [`EvmCaller`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvmCallError {
    /// The call could not be encoded.
    #[error("invalid call input: {0}")]
    InvalidInput(String),
    /// The contract reverted.
    #[error("call reverted: {0}")]
    Reverted(Bytes),
    /// Execution halted (out of gas, invalid opcode, ...).
    #[error("call halted: {0}")]
    Halted(String),
    /// The EVM failed before or during execution.
    #[error("evm execution failed: {0}")]
    Execution(String),
}

impl From<AccountIdError> for EvmCallError {
    fn from(err: AccountIdError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// Executes read-only contract calls on behalf of the keeper.
pub trait EvmCaller {
    /// Calls `contract` from `from` with `calldata` and returns the raw output.
    /// State changes made by the call are not committed.
    fn call_contract(
        &mut self,
        from: Address,
        contract: Address,
        calldata: Bytes,
    ) -> Result<Bytes, EvmCallError>;
}

/// ABI-encodes `computeUEA(id)`.
pub fn compute_uea_calldata(id: &UniversalAccountId) -> Result<Bytes, AccountIdError> {
    let call = IUEAFactory::computeUEACall {
        _id: UniversalAccount {
            chainNamespace: id.chain_namespace.clone(),
            chainId: id.chain_id.clone(),
            owner: id.owner_bytes()?.into(),
        },
    };
    Ok(call.abi_encode().into())
}

/// [`EvmCaller`] backed by any [`Evm`], using its system-call entry point.
#[derive(Debug)]
pub struct SystemCallAdapter<'a, E> {
    evm: &'a mut E,
}

impl<'a, E> SystemCallAdapter<'a, E> {
    /// Wraps a mutable EVM reference.
    pub const fn new(evm: &'a mut E) -> Self {
        Self { evm }
    }
}

impl<E: Evm> EvmCaller for SystemCallAdapter<'_, E> {
    fn call_contract(
        &mut self,
        from: Address,
        contract: Address,
        calldata: Bytes,
    ) -> Result<Bytes, EvmCallError> {
        let ResultAndState { result, .. } = self
            .evm
            .transact_system_call(from, contract, calldata)
            .map_err(|err| EvmCallError::Execution(err.to_string()))?;

        match result {
            ExecutionResult::Success { output, .. } => Ok(output.into_data()),
            ExecutionResult::Revert { output, .. } => Err(EvmCallError::Reverted(output)),
            ExecutionResult::Halt { reason, .. } => Err(EvmCallError::Halted(format!("{reason:?}"))),
        }
    }
}
