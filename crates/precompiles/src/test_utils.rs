//! In-memory keepers and a call harness for precompile tests.

use crate::keepers::{
    BankKeeper, Delegation, DenomTrace, DistributionKeeper, EvidenceKeeper, GovKeeper,
    ModuleKeepers, ProposalStatus, SlashingKeeper, StakingKeeper, TransferKeeper,
};
use alloy_evm::{
    precompiles::{Precompile, PrecompileInput},
    revm::precompile::PrecompileResult,
    EvmInternals,
};
use alloy_primitives::{Address, B256, U256};
use pc_common::AccAddress;
use revm::{
    context::{
        journal::{Journal, JournalInner},
        BlockEnv, CfgEnv, TxEnv,
    },
    database::{CacheDB, EmptyDB},
    primitives::hardfork::SpecId,
};
use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

pub(crate) type TestJournal = Journal<CacheDB<EmptyDB>>;

pub(crate) const GAS_LIMIT: u64 = 1_000_000;

pub(crate) const CALLER: Address = Address::repeat_byte(0xca);

pub(crate) fn run_call(
    precompile: &impl Precompile,
    target: Address,
    data: &[u8],
    gas: u64,
) -> PrecompileResult {
    let mut journal: TestJournal = Journal::new_with_inner(CacheDB::default(), JournalInner::new());
    journal.inner.set_spec_id(SpecId::PRAGUE);
    let block_env = BlockEnv::default();
    let cfg_env: CfgEnv = CfgEnv::default();
    let tx_env = TxEnv::default();

    let input = PrecompileInput {
        data,
        gas,
        caller: CALLER,
        value: U256::ZERO,
        target_address: target,
        is_static: false,
        bytecode_address: target,
        internals: EvmInternals::new(&mut journal, &block_env, &cfg_env, &tx_env),
    };

    precompile.call(input)
}

/// One value store implementing every keeper trait.
#[derive(Debug, Default)]
pub(crate) struct MockChain {
    pub(crate) balances: HashMap<(AccAddress, String), U256>,
    pub(crate) supply: HashMap<String, U256>,
    pub(crate) delegations: HashMap<(AccAddress, String), Delegation>,
    pub(crate) rewards: HashMap<AccAddress, U256>,
    pub(crate) traces: HashMap<String, DenomTrace>,
    pub(crate) proposals: HashMap<u64, ProposalStatus>,
    pub(crate) jailed: HashSet<AccAddress>,
    pub(crate) evidence: HashSet<B256>,
}

impl MockChain {
    pub(crate) fn into_keepers(self) -> ModuleKeepers {
        let chain = Arc::new(self);
        ModuleKeepers {
            bank: chain.clone(),
            staking: chain.clone(),
            distribution: chain.clone(),
            transfer: chain.clone(),
            gov: chain.clone(),
            slashing: chain.clone(),
            evidence: chain,
        }
    }
}

impl BankKeeper for MockChain {
    fn balance(&self, account: &AccAddress, denom: &str) -> U256 {
        self.balances
            .get(&(account.clone(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    fn supply(&self, denom: &str) -> U256 {
        self.supply.get(denom).copied().unwrap_or_default()
    }
}

impl StakingKeeper for MockChain {
    fn delegation(&self, delegator: &AccAddress, validator: &str) -> Option<Delegation> {
        self.delegations
            .get(&(delegator.clone(), validator.to_string()))
            .copied()
    }
}

impl DistributionKeeper for MockChain {
    fn delegation_total_rewards(&self, delegator: &AccAddress) -> U256 {
        self.rewards.get(delegator).copied().unwrap_or_default()
    }
}

impl TransferKeeper for MockChain {
    fn denom_trace(&self, hash: &str) -> Option<DenomTrace> {
        self.traces.get(hash).cloned()
    }
}

impl GovKeeper for MockChain {
    fn proposal_status(&self, id: u64) -> Option<ProposalStatus> {
        self.proposals.get(&id).copied()
    }
}

impl SlashingKeeper for MockChain {
    fn is_jailed(&self, validator: &AccAddress) -> bool {
        self.jailed.contains(validator)
    }
}

impl EvidenceKeeper for MockChain {
    fn has_evidence(&self, hash: B256) -> bool {
        self.evidence.contains(&hash)
    }
}
