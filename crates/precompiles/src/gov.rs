//! Governance precompile.

use crate::{
    call::{charge, decode_error, output},
    keepers::GovKeeper,
    registry::StaticPrecompile,
};
use alloy::{
    sol,
    sol_types::SolCall,
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use std::sync::{Arc, OnceLock};

sol! {
    interface IGov {
        function getProposalStatus(uint64 proposalId) external view returns (uint8);
    }
}

/// Address of the governance precompile.
pub const GOV_PRECOMPILE_ADDR: Address = address!("0x0000000000000000000000000000000000000805");

/// Gas charged per status query.
pub const GOV_QUERY_GAS: u64 = 2_000;

/// Exposes proposal status. Unknown proposals read as status `0`.
#[derive(Debug, Clone)]
pub struct GovPrecompile {
    keeper: Arc<dyn GovKeeper>,
}

impl GovPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("gov"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn GovKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for GovPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, GOV_QUERY_GAS)?;

        let call = IGov::getProposalStatusCall::abi_decode(input.data).map_err(decode_error)?;
        let status = self
            .keeper
            .proposal_status(call.proposalId)
            .map_or(0u8, |status| status as u8);

        output(GOV_QUERY_GAS, IGov::getProposalStatusCall::abi_encode_returns(&status))
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for GovPrecompile {
    fn address(&self) -> Address {
        GOV_PRECOMPILE_ADDR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        keepers::ProposalStatus,
        test_utils::{run_call, MockChain, GAS_LIMIT},
    };

    fn status_of(chain: MockChain, proposal_id: u64) -> u8 {
        let precompile = GovPrecompile::new(chain.into_keepers().gov);
        let calldata = IGov::getProposalStatusCall {
            proposalId: proposal_id,
        }
        .abi_encode();
        let out = run_call(&precompile, GOV_PRECOMPILE_ADDR, &calldata, GAS_LIMIT).unwrap();
        IGov::getProposalStatusCall::abi_decode_returns(&out.bytes).unwrap()
    }

    #[test]
    fn reports_known_status() {
        let mut chain = MockChain::default();
        chain.proposals.insert(7, ProposalStatus::VotingPeriod);
        assert_eq!(status_of(chain, 7), 2);
    }

    #[test]
    fn unknown_proposal_is_zero() {
        assert_eq!(status_of(MockChain::default(), 1), 0);
    }
}
