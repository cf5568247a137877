//! Ledger interface used by the keeper, and its journal-backed implementation.

use alloy_primitives::{Address, U256};
use pc_common::{module_address, AccAddress, Coin};
use revm::context_interface::journaled_state::JournalTr;
use thiserror::Error;

/// Errors returned by a [`BankKeeper`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    /// The ledger does not hold this denomination.
    #[error("unsupported denom {0}")]
    UnsupportedDenom(String),
    /// The sending account cannot cover the amount.
    #[error("insufficient funds: {account} holds {available}, needs {needed}")]
    InsufficientFunds {
        /// Sending account.
        account: AccAddress,
        /// Balance held by the sender.
        available: U256,
        /// Amount requested.
        needed: U256,
    },
    /// The recipient cannot hold native balance.
    #[error("invalid recipient {0}")]
    InvalidRecipient(AccAddress),
    /// Crediting the account would overflow its balance.
    #[error("balance overflow")]
    BalanceOverflow,
    /// The underlying state access failed.
    #[error("state error: {0}")]
    State(String),
}

/// Mint and transfer primitives of the native ledger.
pub trait BankKeeper {
    /// Creates `coin` out of thin air in the account of `module_name`.
    fn mint_coins(&mut self, module_name: &str, coin: &Coin) -> Result<(), BankError>;

    /// Moves `coin` from the account of `module_name` to `recipient`.
    fn send_coins_from_module_to_account(
        &mut self,
        module_name: &str,
        recipient: &AccAddress,
        coin: &Coin,
    ) -> Result<(), BankError>;
}

/// [`BankKeeper`] over a revm journal, where the native balance of an
/// account is its balance in the base denomination.
///
/// Every mutation is journaled, so a surrounding checkpoint revert undoes it.
#[derive(Debug)]
pub struct JournalBank<'a, J> {
    journal: &'a mut J,
    base_denom: String,
}

impl<'a, J: JournalTr> JournalBank<'a, J> {
    /// Wraps `journal`, serving balances of `base_denom`.
    pub fn new(journal: &'a mut J, base_denom: impl Into<String>) -> Self {
        Self {
            journal,
            base_denom: base_denom.into(),
        }
    }

    /// Returns the current balance of `address`.
    pub fn balance(&mut self, address: Address) -> Result<U256, BankError> {
        let account = self
            .journal
            .load_account(address)
            .map_err(|err| BankError::State(err.to_string()))?;
        Ok(account.info.balance)
    }

    fn ensure_base_denom(&self, coin: &Coin) -> Result<(), BankError> {
        if coin.denom == self.base_denom {
            Ok(())
        } else {
            Err(BankError::UnsupportedDenom(coin.denom.clone()))
        }
    }

    fn module_evm_address(module_name: &str) -> Result<Address, BankError> {
        let account = module_address(module_name);
        account
            .to_evm_address()
            .ok_or(BankError::InvalidRecipient(account))
    }
}

impl<J: JournalTr> BankKeeper for JournalBank<'_, J> {
    fn mint_coins(&mut self, module_name: &str, coin: &Coin) -> Result<(), BankError> {
        self.ensure_base_denom(coin)?;
        let module = Self::module_evm_address(module_name)?;

        let balance = self.balance(module)?;
        if balance.checked_add(coin.amount).is_none() {
            return Err(BankError::BalanceOverflow);
        }

        self.journal
            .balance_incr(module, coin.amount)
            .map_err(|err| BankError::State(err.to_string()))?;

        tracing::info!(target: "ue::bank", module = module_name, %coin, "minted coins");
        Ok(())
    }

    fn send_coins_from_module_to_account(
        &mut self,
        module_name: &str,
        recipient: &AccAddress,
        coin: &Coin,
    ) -> Result<(), BankError> {
        self.ensure_base_denom(coin)?;
        let module = Self::module_evm_address(module_name)?;
        let to = recipient
            .to_evm_address()
            .ok_or_else(|| BankError::InvalidRecipient(recipient.clone()))?;

        let available = self.balance(module)?;
        if available < coin.amount {
            return Err(BankError::InsufficientFunds {
                account: module_address(module_name),
                available,
                needed: coin.amount,
            });
        }

        if let Some(err) = self
            .journal
            .transfer(module, to, coin.amount)
            .map_err(|err| BankError::State(err.to_string()))?
        {
            return Err(BankError::State(format!("transfer rejected: {err:?}")));
        }

        tracing::info!(target: "ue::bank", module = module_name, %recipient, %coin, "sent coins");
        Ok(())
    }
}
