//! Read interfaces of the native modules served by the precompiles.
//!
//! Each precompile holds an `Arc` to the keeper of its module. Keepers are
//! queried from inside EVM execution, so they must be shareable across threads.

use alloy_primitives::{B256, U256};
use pc_common::AccAddress;
use std::{fmt::Debug, sync::Arc};

/// Balances and supply of the bank module.
pub trait BankKeeper: Debug + Send + Sync {
    /// Balance of `account` in `denom`.
    fn balance(&self, account: &AccAddress, denom: &str) -> U256;

    /// Total supply of `denom`.
    fn supply(&self, denom: &str) -> U256;
}

/// A delegation held by an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delegation {
    /// Delegator shares of the validator.
    pub shares: U256,
    /// Token value of the shares.
    pub balance: U256,
}

/// Delegations of the staking module.
pub trait StakingKeeper: Debug + Send + Sync {
    /// Delegation of `delegator` to the validator with operator address
    /// `validator`, if any.
    fn delegation(&self, delegator: &AccAddress, validator: &str) -> Option<Delegation>;
}

/// Rewards of the distribution module.
pub trait DistributionKeeper: Debug + Send + Sync {
    /// Sum of outstanding rewards of `delegator` over all its delegations.
    fn delegation_total_rewards(&self, delegator: &AccAddress) -> U256;
}

/// Origin of a token received over IBC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenomTrace {
    /// Port/channel hops the token travelled, e.g. `transfer/channel-0`.
    pub path: String,
    /// Denomination on the source chain.
    pub base_denom: String,
}

/// Denom traces of the ICS-20 transfer module.
pub trait TransferKeeper: Debug + Send + Sync {
    /// Trace registered under `hash` (hex, without the `ibc/` prefix).
    fn denom_trace(&self, hash: &str) -> Option<DenomTrace>;
}

/// Status of a governance proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProposalStatus {
    /// Waiting for the minimum deposit.
    DepositPeriod = 1,
    /// Open for votes.
    VotingPeriod = 2,
    /// Accepted.
    Passed = 3,
    /// Rejected.
    Rejected = 4,
    /// Passed but its messages failed.
    Failed = 5,
}

/// Proposals of the governance module.
pub trait GovKeeper: Debug + Send + Sync {
    /// Status of proposal `id`, if it exists.
    fn proposal_status(&self, id: u64) -> Option<ProposalStatus>;
}

/// Validator signing state of the slashing module.
pub trait SlashingKeeper: Debug + Send + Sync {
    /// Whether the validator with operator account `validator` is jailed.
    fn is_jailed(&self, validator: &AccAddress) -> bool;
}

/// Submitted misbehaviour of the evidence module.
pub trait EvidenceKeeper: Debug + Send + Sync {
    /// Whether evidence with `hash` has been recorded.
    fn has_evidence(&self, hash: B256) -> bool;
}

/// The module keepers a registry is built from.
#[derive(Debug, Clone)]
pub struct ModuleKeepers {
    /// Bank module.
    pub bank: Arc<dyn BankKeeper>,
    /// Staking module.
    pub staking: Arc<dyn StakingKeeper>,
    /// Distribution module.
    pub distribution: Arc<dyn DistributionKeeper>,
    /// ICS-20 transfer module.
    pub transfer: Arc<dyn TransferKeeper>,
    /// Governance module.
    pub gov: Arc<dyn GovKeeper>,
    /// Slashing module.
    pub slashing: Arc<dyn SlashingKeeper>,
    /// Evidence module.
    pub evidence: Arc<dyn EvidenceKeeper>,
}
