//! Distribution precompile.

use crate::{
    call::{charge, decode_error, output},
    keepers::DistributionKeeper,
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
use pc_common::AccAddress;
use std::sync::{Arc, OnceLock};

sol! {
    interface IDistribution {
        function delegationTotalRewards(address delegator) external view returns (uint256);
    }
}

/// Address of the distribution precompile.
pub const DISTRIBUTION_PRECOMPILE_ADDR: Address =
    address!("0x0000000000000000000000000000000000000801");

/// Gas charged per rewards query.
pub const DISTRIBUTION_QUERY_GAS: u64 = 4_000;

/// Exposes outstanding delegation rewards.
#[derive(Debug, Clone)]
pub struct DistributionPrecompile {
    keeper: Arc<dyn DistributionKeeper>,
}

impl DistributionPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("distribution"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn DistributionKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for DistributionPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, DISTRIBUTION_QUERY_GAS)?;

        let call = IDistribution::delegationTotalRewardsCall::abi_decode(input.data)
            .map_err(decode_error)?;
        let rewards = self
            .keeper
            .delegation_total_rewards(&AccAddress::from(call.delegator));

        output(DISTRIBUTION_QUERY_GAS, rewards.abi_encode())
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for DistributionPrecompile {
    fn address(&self) -> Address {
        DISTRIBUTION_PRECOMPILE_ADDR
    }
}
