//! Evidence precompile.

use crate::{
    call::{charge, decode_error, output},
    keepers::EvidenceKeeper,
    registry::StaticPrecompile,
};
use alloy::{
    sol,
    sol_types::{SolCall, SolValue},
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use std::sync::{Arc, OnceLock};

sol! {
    interface IEvidence {
        function hasEvidence(bytes32 evidenceHash) external view returns (bool);
    }
}

/// Address of the evidence precompile.
pub const EVIDENCE_PRECOMPILE_ADDR: Address =
    address!("0x0000000000000000000000000000000000000807");

/// Gas charged per lookup.
pub const EVIDENCE_QUERY_GAS: u64 = 2_000;

/// Exposes whether misbehaviour evidence has been recorded.
#[derive(Debug, Clone)]
pub struct EvidencePrecompile {
    keeper: Arc<dyn EvidenceKeeper>,
}

impl EvidencePrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("evidence"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn EvidenceKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for EvidencePrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, EVIDENCE_QUERY_GAS)?;

        let call = IEvidence::hasEvidenceCall::abi_decode(input.data).map_err(decode_error)?;

        output(
            EVIDENCE_QUERY_GAS,
            self.keeper.has_evidence(call.evidenceHash).abi_encode(),
        )
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for EvidencePrecompile {
    fn address(&self) -> Address {
        EVIDENCE_PRECOMPILE_ADDR
    }
}
