//! # Push Chain static precompiles
//!
//! Native modules of the chain exposed to EVM contracts at fixed addresses.
//!
//! | Address  | Module                        | Calls |
//! |----------|-------------------------------|-------|
//! | `0x0100` | [`p256`]                      | `P256VERIFY` (RIP-7212) |
//! | `0x0400` | [`bech32`]                    | `hexToBech32`, `bech32ToHex` |
//! | `0x0800` | [`staking`]                   | `delegation` |
//! | `0x0801` | [`distribution`]              | `delegationTotalRewards` |
//! | `0x0802` | [`ics20`]                     | `denomTrace` |
//! | `0x0804` | [`bank`]                      | `balanceOf`, `totalSupply` |
//! | `0x0805` | [`gov`]                       | `getProposalStatus` |
//! | `0x0806` | [`slashing`]                  | `isJailed` |
//! | `0x0807` | [`evidence`]                  | `hasEvidence` |
//!
//! The set is assembled once by [`new_available_static_precompiles`] from the
//! module keepers and is immutable afterwards. Construction failures and
//! address collisions abort startup. [`PcEvmFactory`] installs the set on
//! every EVM it creates.
//!
//! ```ignore
//! let keepers = ModuleKeepers { bank, staking, distribution, transfer, gov, slashing, evidence };
//! let factory = PcEvmFactory::with_keepers(&keepers, &PrecompileSettings::from_env()?);
//! let evm = factory.create_evm(db, evm_env);
//! ```

pub mod bank;
pub mod bech32;
mod call;
pub mod config;
pub mod distribution;
pub mod evidence;
pub mod factory;
pub mod gov;
pub mod ics20;
pub mod keepers;
pub mod p256;
pub mod registry;
pub mod slashing;
pub mod staking;

#[cfg(test)]
mod test_utils;

pub use config::PrecompileSettings;
pub use factory::PcEvmFactory;
pub use keepers::ModuleKeepers;
pub use registry::{
    new_available_static_precompiles, RegistryError, StaticPrecompile, StaticPrecompiles,
};
