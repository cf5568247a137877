//! Bank precompile: native balances and supply.

use crate::{
    call::{charge, decode_error, output},
    keepers::BankKeeper,
    registry::StaticPrecompile,
};
use alloy::{
    sol,
    sol_types::{SolInterface, SolValue},
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use pc_common::AccAddress;
use std::sync::{Arc, OnceLock};

sol! {
    interface IBank {
        function balanceOf(address account) external view returns (uint256);
        function totalSupply() external view returns (uint256);
    }
}

/// Address of the bank precompile.
pub const BANK_PRECOMPILE_ADDR: Address = address!("0x0000000000000000000000000000000000000804");

/// Gas charged per query.
pub const BANK_QUERY_GAS: u64 = 2_600;

/// Exposes balances of a single denomination.
#[derive(Debug, Clone)]
pub struct BankPrecompile {
    keeper: Arc<dyn BankKeeper>,
    denom: String,
}

impl BankPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("bank"))
    }

    /// Serves balances of `denom` from `keeper`.
    pub fn new(keeper: Arc<dyn BankKeeper>, denom: impl Into<String>) -> Self {
        Self {
            keeper,
            denom: denom.into(),
        }
    }
}

impl Precompile for BankPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, BANK_QUERY_GAS)?;

        let encoded = match IBank::IBankCalls::abi_decode(input.data).map_err(decode_error)? {
            IBank::IBankCalls::balanceOf(call) => self
                .keeper
                .balance(&AccAddress::from(call.account), &self.denom)
                .abi_encode(),
            IBank::IBankCalls::totalSupply(_) => self.keeper.supply(&self.denom).abi_encode(),
        };

        output(BANK_QUERY_GAS, encoded)
    }

    fn is_pure(&self) -> bool {
        false
    }
}

impl StaticPrecompile for BankPrecompile {
    fn address(&self) -> Address {
        BANK_PRECOMPILE_ADDR
    }
}
