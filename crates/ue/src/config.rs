//! Configuration of the universal executor module.

use crate::{conversion::USD_TO_PC_RATE, types::FACTORY_PROXY_ADDRESS, MODULE_NAME};
use alloy_primitives::Address;
use pc_common::BASE_DENOM;
use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use thiserror::Error;

/// Environment variable overriding the UEA factory address.
pub const FACTORY_ADDRESS_ENV: &str = "PC_UEA_FACTORY_ADDR";

/// Environment variable overriding the USD to native conversion rate.
pub const USD_TO_PC_RATE_ENV: &str = "PC_USD_TO_PC_RATE";

/// Key of the module section in the genesis extras.
const GENESIS_KEY: &str = "ue";

/// Errors that can occur while building a [`UeConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set but empty.
    #[error("environment variable {var} is empty")]
    EmptyEnv {
        /// Name of the variable.
        var: String,
    },
    /// The factory address could not be parsed.
    #[error("invalid factory address: {0}")]
    InvalidAddress(String),
    /// The conversion rate could not be parsed.
    #[error("invalid conversion rate: {0}")]
    InvalidRate(String),
    /// The conversion rate is zero.
    #[error("conversion rate must be non-zero")]
    ZeroRate,
    /// The genesis section could not be deserialized.
    #[error("invalid ue genesis config: {0}")]
    Genesis(String),
}

/// Runtime parameters of the module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UeConfig {
    /// Address of the UEA factory proxy.
    pub factory_address: Address,
    /// Module name; seeds the module account that escrows minted coins.
    pub module_name: String,
    /// Denomination minted to depositors.
    pub base_denom: String,
    /// Native tokens minted per locked USD.
    pub usd_to_pc_rate: u64,
}

impl Default for UeConfig {
    fn default() -> Self {
        Self {
            factory_address: FACTORY_PROXY_ADDRESS,
            module_name: MODULE_NAME.to_string(),
            base_denom: BASE_DENOM.to_string(),
            usd_to_pc_rate: USD_TO_PC_RATE,
        }
    }
}

impl UeConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Unset variables keep their defaults; set variables must parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Loads the configuration from `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = non_empty(&lookup, FACTORY_ADDRESS_ENV)? {
            config.factory_address = Address::from_str(&raw)
                .map_err(|err| ConfigError::InvalidAddress(err.to_string()))?;
        }

        if let Some(raw) = non_empty(&lookup, USD_TO_PC_RATE_ENV)? {
            config.usd_to_pc_rate = raw
                .parse()
                .map_err(|err: std::num::ParseIntError| ConfigError::InvalidRate(err.to_string()))?;
        }

        config.validate()
    }

    /// Reads the optional `"ue"` section of chain genesis extras.
    pub fn from_genesis_extra(extra: &serde_json::Value) -> Result<Self, ConfigError> {
        let Some(section) = extra.get(GENESIS_KEY) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_value(section.clone())
            .map_err(|err| ConfigError::Genesis(err.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.usd_to_pc_rate == 0 {
            return Err(ConfigError::ZeroRate);
        }
        Ok(self)
    }
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::EmptyEnv { var: var.into() }),
        Some(raw) => Ok(Some(raw.trim().to_string())),
    }
}
