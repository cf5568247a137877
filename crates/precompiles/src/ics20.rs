//! ICS-20 transfer precompile: resolves IBC voucher denominations.

use crate::{
    call::{charge, decode_error, output},
    keepers::TransferKeeper,
    registry::StaticPrecompile,
};
use alloy::{
    sol,
    sol_types::{SolCall, SolValue},
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{PrecompileError, PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use std::sync::{Arc, OnceLock};

sol! {
    interface IICS20 {
        function denomTrace(string hash)
            external
            view
            returns (string path, string baseDenom);
    }
}

/// Address of the ICS-20 precompile.
pub const ICS20_PRECOMPILE_ADDR: Address = address!("0x0000000000000000000000000000000000000802");

/// Gas charged per trace lookup.
pub const ICS20_QUERY_GAS: u64 = 3_000;

/// Exposes denom traces of IBC vouchers.
///
/// The hash may be given with or without the `ibc/` prefix of the voucher
/// denomination. Unknown hashes are an error.
#[derive(Debug, Clone)]
pub struct Ics20Precompile {
    keeper: Arc<dyn TransferKeeper>,
}

impl Ics20Precompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("ics20"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn TransferKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for Ics20Precompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, ICS20_QUERY_GAS)?;

        let call = IICS20::denomTraceCall::abi_decode(input.data).map_err(decode_error)?;
        let hash = call.hash.strip_prefix("ibc/").unwrap_or(&call.hash);
        let trace = self
            .keeper
            .denom_trace(hash)
            .ok_or_else(|| PrecompileError::Other(format!("denom trace {hash} not found").into()))?;

        output(
            ICS20_QUERY_GAS,
            (trace.path, trace.base_denom).abi_encode_params(),
        )
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for Ics20Precompile {
    fn address(&self) -> Address {
        ICS20_PRECOMPILE_ADDR
    }
}
