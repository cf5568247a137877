//! Gas and encoding helpers shared by the precompiles.

use alloy::sol_types::Error as AbiError;
use alloy_evm::revm::precompile::{PrecompileError, PrecompileResult};
use revm::precompile::PrecompileOutput;

/// Fails with `OutOfGas` unless `gas_limit` covers `cost`.
pub(crate) const fn charge(gas_limit: u64, cost: u64) -> Result<(), PrecompileError> {
    if gas_limit < cost {
        return Err(PrecompileError::OutOfGas);
    }
    Ok(())
}

pub(crate) fn decode_error(err: AbiError) -> PrecompileError {
    PrecompileError::Other(err.to_string().into())
}

/// Successful output charging `cost` gas.
pub(crate) fn output(cost: u64, data: Vec<u8>) -> PrecompileResult {
    Ok(PrecompileOutput::new(cost, data.into()))
}
