//! Bech32 precompile: converts between EVM hex and bech32 account strings.

use crate::{
    call::{charge, decode_error, output},
    registry::{RegistryError, StaticPrecompile},
};
use alloy::{
    sol,
    sol_types::{SolInterface, SolValue},
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{PrecompileError, PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use pc_common::{decode_bech32, encode_bech32};
use std::sync::OnceLock;

sol! {
    interface IBech32 {
        function hexToBech32(address addr, string prefix) external returns (string);
        function bech32ToHex(string bech32Address) external returns (address);
    }
}

/// Address of the bech32 precompile.
pub const BECH32_PRECOMPILE_ADDR: Address = address!("0x0000000000000000000000000000000000000400");

/// Base gas of the bech32 precompile in the default registry.
pub const BECH32_PRECOMPILE_BASE_GAS: u64 = 6_000;

/// Stateless address-format conversion.
#[derive(Debug, Clone, Copy)]
pub struct Bech32Precompile {
    base_gas: u64,
}

impl Bech32Precompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("bech32"))
    }

    /// Creates the precompile charging `base_gas` per call.
    pub const fn new(base_gas: u64) -> Result<Self, RegistryError> {
        if base_gas == 0 {
            return Err(RegistryError::ZeroBaseGas {
                precompile: "bech32",
            });
        }
        Ok(Self { base_gas })
    }

    /// Gas charged per call.
    pub const fn base_gas(&self) -> u64 {
        self.base_gas
    }
}

impl Precompile for Bech32Precompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        charge(input.gas, self.base_gas)?;

        let encoded = match IBech32::IBech32Calls::abi_decode(input.data).map_err(decode_error)? {
            IBech32::IBech32Calls::hexToBech32(call) => {
                if call.prefix.is_empty() {
                    return Err(PrecompileError::Other("empty bech32 prefix".into()));
                }
                encode_bech32(&call.prefix, call.addr.as_slice())
                    .map_err(|err| PrecompileError::Other(err.to_string().into()))?
                    .abi_encode()
            }
            IBech32::IBech32Calls::bech32ToHex(call) => {
                let (_, account) = decode_bech32(&call.bech32Address)
                    .map_err(|err| PrecompileError::Other(err.to_string().into()))?;
                let address = account.to_evm_address().ok_or_else(|| {
                    PrecompileError::Other(format!(
                        "bech32 payload is {} bytes, expected 20",
                        account.as_bytes().len()
                    ).into())
                })?;
                address.abi_encode()
            }
        };

        output(self.base_gas, encoded)
    }
}

impl StaticPrecompile for Bech32Precompile {
    fn address(&self) -> Address {
        BECH32_PRECOMPILE_ADDR
    }
}
