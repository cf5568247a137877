//! `P256VERIFY`: secp256r1 signature verification (RIP-7212).
//!
//! Input is 160 bytes: `hash || r || s || x || y`. A valid signature returns
//! the 32-byte word `1`; anything else, malformed input included, returns
//! empty output. The call is charged in both cases.

use crate::registry::StaticPrecompile;
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::{secp256r1, PrecompileId, PrecompileResult},
};
use alloy_primitives::{address, Address};
use std::sync::OnceLock;

/// Address of the P256 verification precompile.
pub const P256_PRECOMPILE_ADDR: Address = address!("0x0000000000000000000000000000000000000100");

/// Stateless secp256r1 verifier backed by revm's RIP-7212 implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct P256VerifyPrecompile;

impl P256VerifyPrecompile {
    /// Lazily initialized since `PrecompileId::custom` is not const.
    pub fn id() -> &'static PrecompileId {
        static ID: OnceLock<PrecompileId> = OnceLock::new();
        ID.get_or_init(|| PrecompileId::custom("p256verify"))
    }
}

impl Precompile for P256VerifyPrecompile {
    fn precompile_id(&self) -> &PrecompileId {
        Self::id()
    }

    fn call(&self, input: PrecompileInput<'_>) -> PrecompileResult {
        secp256r1::p256_verify(input.data, input.gas)
    }
}

impl StaticPrecompile for P256VerifyPrecompile {
    fn address(&self) -> Address {
        P256_PRECOMPILE_ADDR
    }
}
