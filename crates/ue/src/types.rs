//! Identity types of the universal executor module.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Name of the module; also the seed of its module account.
pub const MODULE_NAME: &str = "ue";

/// Address of the UEA factory proxy contract.
pub const FACTORY_PROXY_ADDRESS: Address = address!("0x00000000000000000000000000000000000000ea");

/// Errors raised while validating a [`UniversalAccountId`] or a CAIP-2 string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    /// The identifier has no `:` separating namespace and reference.
    #[error("chain identifier {0:?} is missing the ':' separator")]
    MissingSeparator(String),
    /// The namespace is not 3-8 characters of `[-a-z0-9]`.
    #[error("invalid chain namespace {0:?}")]
    InvalidNamespace(String),
    /// The reference is not 1-32 characters of `[-_a-zA-Z0-9]`.
    #[error("invalid chain reference {0:?}")]
    InvalidReference(String),
    /// The owner is empty.
    #[error("owner must not be empty")]
    EmptyOwner,
    /// The owner is not `0x`-prefixed hex.
    #[error("owner {0:?} is not 0x-prefixed hex")]
    InvalidOwner(String),
}

/// A CAIP-2 chain identifier, e.g. `eip155:1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainRef {
    namespace: String,
    reference: String,
}

impl ChainRef {
    /// Builds a chain identifier after validating both halves.
    pub fn new(
        namespace: impl Into<String>,
        reference: impl Into<String>,
    ) -> Result<Self, AccountIdError> {
        let namespace = namespace.into();
        let reference = reference.into();

        let namespace_ok = (3..=8).contains(&namespace.len())
            && namespace
                .bytes()
                .all(|b| b == b'-' || b.is_ascii_lowercase() || b.is_ascii_digit());
        if !namespace_ok {
            return Err(AccountIdError::InvalidNamespace(namespace));
        }

        let reference_ok = (1..=32).contains(&reference.len())
            && reference
                .bytes()
                .all(|b| b == b'-' || b == b'_' || b.is_ascii_alphanumeric());
        if !reference_ok {
            return Err(AccountIdError::InvalidReference(reference));
        }

        Ok(Self {
            namespace,
            reference,
        })
    }

    /// The namespace half, e.g. `eip155`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The reference half, e.g. `1`.
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl FromStr for ChainRef {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| AccountIdError::MissingSeparator(s.to_string()))?;
        Self::new(namespace, reference)
    }
}

impl fmt::Display for ChainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

/// Identity of an account owner on a foreign chain.
///
/// The UEA factory derives the same executing account for the same identity,
/// so this value is all a mint needs to locate its recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAccountId {
    /// CAIP-2 namespace of the foreign chain, e.g. `eip155`.
    pub chain_namespace: String,
    /// CAIP-2 reference of the foreign chain, e.g. `11155111`.
    pub chain_id: String,
    /// Owner address on the foreign chain, `0x`-prefixed hex.
    pub owner: String,
}

impl UniversalAccountId {
    /// Creates an identity from its three components.
    pub fn new(
        chain_namespace: impl Into<String>,
        chain_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            chain_namespace: chain_namespace.into(),
            chain_id: chain_id.into(),
            owner: owner.into(),
        }
    }

    /// Returns the CAIP-2 identifier of the owner's chain.
    pub fn caip2(&self) -> String {
        format!("{}:{}", self.chain_namespace, self.chain_id)
    }

    /// Returns the validated CAIP-2 identifier of the owner's chain.
    pub fn chain(&self) -> Result<ChainRef, AccountIdError> {
        ChainRef::new(self.chain_namespace.as_str(), self.chain_id.as_str())
    }

    /// Decodes the owner into the raw bytes the factory contract expects.
    pub fn owner_bytes(&self) -> Result<Vec<u8>, AccountIdError> {
        if self.owner.is_empty() {
            return Err(AccountIdError::EmptyOwner);
        }
        let digits = self
            .owner
            .strip_prefix("0x")
            .ok_or_else(|| AccountIdError::InvalidOwner(self.owner.clone()))?;
        let bytes =
            hex::decode(digits).map_err(|_| AccountIdError::InvalidOwner(self.owner.clone()))?;
        if bytes.is_empty() {
            return Err(AccountIdError::EmptyOwner);
        }
        Ok(bytes)
    }

    /// Checks that the chain is a valid CAIP-2 identifier and the owner decodes.
    pub fn validate(&self) -> Result<(), AccountIdError> {
        self.chain()?;
        self.owner_bytes()?;
        Ok(())
    }
}
