//! The static precompile set of the chain.
//!
//! The set is built once at startup and never mutated afterwards. Every EVM
//! created by [`crate::PcEvmFactory`] gets the same entries installed.

use crate::{
    bank::BankPrecompile, bech32::Bech32Precompile, config::PrecompileSettings,
    distribution::DistributionPrecompile, evidence::EvidencePrecompile, gov::GovPrecompile,
    ics20::Ics20Precompile, keepers::ModuleKeepers, p256::P256VerifyPrecompile,
    slashing::SlashingPrecompile, staking::StakingPrecompile,
};
use alloy_evm::precompiles::{DynPrecompile, Precompile, PrecompileInput, PrecompilesMap};
use alloy_primitives::Address;
use revm::precompile::Precompiles;
use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt::Debug,
    sync::Arc,
};
use thiserror::Error;

/// A precompile that lives at a fixed address.
pub trait StaticPrecompile: Precompile + Debug + Send + Sync {
    /// Address the precompile is installed at.
    fn address(&self) -> Address;
}

/// Errors raised while building a [`StaticPrecompiles`] set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two precompiles claim the same address.
    #[error("duplicate precompile address {0}")]
    DuplicateAddress(Address),
    /// A precompile claims the address of an Ethereum precompile.
    #[error("precompile address {0} is reserved by the Ethereum precompile set")]
    ReservedAddress(Address),
    /// A precompile was configured without a gas cost.
    #[error("{precompile} precompile base gas must be non-zero")]
    ZeroBaseGas {
        /// Name of the precompile.
        precompile: &'static str,
    },
}

/// Immutable address to precompile mapping.
#[derive(Debug, Clone, Default)]
pub struct StaticPrecompiles {
    entries: BTreeMap<Address, Arc<dyn StaticPrecompile>>,
}

impl StaticPrecompiles {
    /// Builds the set, rejecting duplicate and reserved addresses.
    pub fn try_new<I>(precompiles: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Arc<dyn StaticPrecompile>>,
    {
        let reserved = Precompiles::berlin();
        let mut entries = BTreeMap::new();

        for precompile in precompiles {
            let address = precompile.address();
            if reserved.contains(&address) {
                return Err(RegistryError::ReservedAddress(address));
            }
            match entries.entry(address) {
                Entry::Occupied(_) => return Err(RegistryError::DuplicateAddress(address)),
                Entry::Vacant(slot) => {
                    slot.insert(precompile);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Builds the set.
    ///
    /// # Panics
    ///
    /// Panics if [`Self::try_new`] fails. A partial precompile set must never
    /// be run.
    pub fn new<I>(precompiles: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn StaticPrecompile>>,
    {
        Self::try_new(precompiles)
            .unwrap_or_else(|err| panic!("failed to build static precompiles: {err}"))
    }

    /// Builds the chain's module precompiles over `keepers`.
    pub fn from_keepers(
        keepers: &ModuleKeepers,
        settings: &PrecompileSettings,
    ) -> Result<Self, RegistryError> {
        let precompiles: [Arc<dyn StaticPrecompile>; 9] = [
            Arc::new(P256VerifyPrecompile),
            Arc::new(Bech32Precompile::new(settings.bech32_base_gas)?),
            Arc::new(StakingPrecompile::new(keepers.staking.clone())),
            Arc::new(DistributionPrecompile::new(keepers.distribution.clone())),
            Arc::new(Ics20Precompile::new(keepers.transfer.clone())),
            Arc::new(BankPrecompile::new(
                keepers.bank.clone(),
                settings.bank_denom.as_str(),
            )),
            Arc::new(GovPrecompile::new(keepers.gov.clone())),
            Arc::new(SlashingPrecompile::new(keepers.slashing.clone())),
            Arc::new(EvidencePrecompile::new(keepers.evidence.clone())),
        ];
        Self::try_new(precompiles)
    }

    /// Addresses in the set, ascending.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> + '_ {
        self.entries.keys()
    }

    /// The precompile at `address`.
    pub fn get(&self, address: &Address) -> Option<&Arc<dyn StaticPrecompile>> {
        self.entries.get(address)
    }

    /// Number of precompiles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers every entry in `precompiles`, replacing what was there.
    pub fn install(&self, precompiles: &mut PrecompilesMap) {
        for (address, precompile) in &self.entries {
            let precompile = Arc::clone(precompile);
            let id = precompile.precompile_id().clone();
            let pure = precompile.is_pure();
            let entry = move |input: PrecompileInput<'_>| precompile.call(input);

            let dyn_precompile = if pure {
                DynPrecompile::new(id, entry)
            } else {
                DynPrecompile::new_stateful(id, entry)
            };
            precompiles.apply_precompile(address, move |_| Some(dyn_precompile));
        }
    }
}

/// Builds the chain's module precompiles.
///
/// # Panics
///
/// Panics if any precompile fails to construct or two share an address.
pub fn new_available_static_precompiles(
    keepers: &ModuleKeepers,
    settings: &PrecompileSettings,
) -> StaticPrecompiles {
    let precompiles = StaticPrecompiles::from_keepers(keepers, settings)
        .unwrap_or_else(|err| panic!("failed to build static precompiles: {err}"));

    tracing::info!(
        target: "precompiles::registry",
        count = precompiles.len(),
        "static precompiles ready"
    );
    precompiles
}
