//! Single-denomination amounts.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of a single denomination, in its base unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination name, e.g. `upc`.
    pub denom: String,
    /// Amount in base units.
    pub amount: U256,
}

impl Coin {
    /// Creates a coin of `amount` base units of `denom`.
    pub fn new(denom: impl Into<String>, amount: U256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Returns `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
