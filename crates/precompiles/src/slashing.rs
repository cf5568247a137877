//! Slashing precompile.

use crate::{
    call::{charge, decode_error, output},
    keepers::SlashingKeeper,
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
    interface ISlashing {
        function isJailed(address validator) external view returns (bool);
    }
}

/// Address of the slashing precompile.
pub const SLASHING_PRECOMPILE_ADDR: Address =
    address!("0x0000000000000000000000000000000000000806");

/// Gas charged per jail query.
pub const SLASHING_QUERY_GAS: u64 = 2_000;

/// Exposes the jail state of validators.
#[derive(Debug, Clone)]
pub struct SlashingPrecompile {
    keeper: Arc<dyn SlashingKeeper>,
}

impl SlashingPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("slashing"))
    }

    /// Creates the precompile over `keeper`.
    pub fn new(keeper: Arc<dyn SlashingKeeper>) -> Self {
        Self { keeper }
    }
}

impl Precompile for SlashingPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, SLASHING_QUERY_GAS)?;

        let call = ISlashing::isJailedCall::abi_decode(input.data).map_err(decode_error)?;
        let jailed = self.keeper.is_jailed(&AccAddress::from(call.validator));

        output(SLASHING_QUERY_GAS, jailed.abi_encode())
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for SlashingPrecompile {
    fn address(&self) -> Address {
        SLASHING_PRECOMPILE_ADDR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{run_call, MockChain, GAS_LIMIT};

    #[test]
    fn reports_jailed_validators() {
        let jailed = address!("0x00000000000000000000000000000000000000e1");
        let free = address!("0x00000000000000000000000000000000000000e2");
        let mut chain = MockChain::default();
        chain.jailed.insert(jailed.into());
        let precompile = SlashingPrecompile::new(chain.into_keepers().slashing);

        for (validator, expected) in [(jailed, true), (free, false)] {
            let calldata = ISlashing::isJailedCall { validator }.abi_encode();
            let out =
                run_call(&precompile, SLASHING_PRECOMPILE_ADDR, &calldata, GAS_LIMIT).unwrap();
            assert_eq!(bool::abi_decode(&out.bytes).unwrap(), expected);
        }
    }
}
