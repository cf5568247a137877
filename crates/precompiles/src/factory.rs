//! EVM factory that installs the chain's static precompiles.

use crate::{
    config::PrecompileSettings,
    keepers::ModuleKeepers,
    registry::{new_available_static_precompiles, StaticPrecompiles},
};
use alloy_evm::{
    eth::{EthEvm, EthEvmContext, EthEvmFactory},
    precompiles::PrecompilesMap,
    Database, Evm, EvmEnv, EvmFactory,
};
use revm::{
    context::{
        result::{EVMError, HaltReason},
        BlockEnv, TxEnv,
    },
    inspector::NoOpInspector,
    primitives::hardfork::SpecId,
    Inspector,
};
use std::sync::Arc;

/// Wrapper around an existing `EvmFactory` whose EVMs carry the static
/// precompile set.
#[derive(Debug, Clone)]
pub struct PcEvmFactory<F = EthEvmFactory> {
    inner: F,
    precompiles: Arc<StaticPrecompiles>,
}

impl<F> PcEvmFactory<F> {
    /// Creates a new factory wrapper installing `precompiles`.
    pub const fn new(inner: F, precompiles: Arc<StaticPrecompiles>) -> Self {
        Self { inner, precompiles }
    }

    /// The installed precompile set.
    pub fn precompiles(&self) -> &StaticPrecompiles {
        &self.precompiles
    }
}

impl PcEvmFactory<EthEvmFactory> {
    /// Builds the module precompiles over `keepers` and wraps the stock
    /// Ethereum factory.
    ///
    /// # Panics
    ///
    /// Panics if the precompile set cannot be constructed.
    pub fn with_keepers(keepers: &ModuleKeepers, settings: &PrecompileSettings) -> Self {
        let precompiles = new_available_static_precompiles(keepers, settings);
        Self::new(EthEvmFactory::default(), Arc::new(precompiles))
    }
}

impl EvmFactory for PcEvmFactory<EthEvmFactory> {
    type Evm<DB: Database, I: Inspector<Self::Context<DB>>> = EthEvm<DB, I, PrecompilesMap>;
    type Context<DB: Database> = EthEvmContext<DB>;
    type Tx = TxEnv;
    type Error<DBError: std::error::Error + Send + Sync + 'static> = EVMError<DBError>;
    type HaltReason = HaltReason;
    type Spec = SpecId;
    type BlockEnv = BlockEnv;
    type Precompiles = PrecompilesMap;

    fn create_evm<DB: Database>(
        &self,
        db: DB,
        evm_env: EvmEnv<Self::Spec, Self::BlockEnv>,
    ) -> Self::Evm<DB, NoOpInspector> {
        let mut evm = self.inner.create_evm(db, evm_env);
        self.precompiles.install(evm.precompiles_mut());
        evm
    }

    fn create_evm_with_inspector<DB: Database, I: Inspector<Self::Context<DB>>>(
        &self,
        db: DB,
        input: EvmEnv<Self::Spec, Self::BlockEnv>,
        inspector: I,
    ) -> Self::Evm<DB, I> {
        let mut evm = self.inner.create_evm_with_inspector(db, input, inspector);
        self.precompiles.install(evm.precompiles_mut());
        evm
    }
}
