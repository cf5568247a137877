//! Staking precompile.

use crate::{
    call::{charge, decode_error, output},
    keepers::StakingKeeper,
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
    interface IStaking {
        function delegation(address delegator, string validator)
            external
            view
            returns (uint256 shares, uint256 balance);
    }
}

/// Address of the staking precompile.
pub const STAKING_PRECOMPILE_ADDR: Address =
    address!("0x0000000000000000000000000000000000000800");

/// Gas charged per delegation lookup.
pub const STAKING_QUERY_GAS: u64 = 4_000;

/// Exposes delegations. A missing delegation reads as zero shares and balance.
#[derive(Debug, Clone)]
pub struct StakingPrecompile {
    keeper: Arc<dyn StakingKeeper>,
}

impl StakingPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("staking"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn StakingKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for StakingPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, STAKING_QUERY_GAS)?;

        let call = IStaking::delegationCall::abi_decode(input.data).map_err(decode_error)?;
        let delegation = self
            .keeper
            .delegation(&AccAddress::from(call.delegator), &call.validator)
            .unwrap_or_default();

        tracing::trace!(
            target: "precompiles::staking",
            delegator = %call.delegator,
            validator = %call.validator,
            shares = %delegation.shares,
            "delegation query"
        );

        output(
            STAKING_QUERY_GAS,
            (delegation.shares, delegation.balance).abi_encode_params(),
        )
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for StakingPrecompile {
    fn address(&self) -> Address {
        STAKING_PRECOMPILE_ADDR
    }
}
