//! Construction parameters of the static precompile set.

use crate::bech32::BECH32_PRECOMPILE_BASE_GAS;
use eyre::WrapErr;
use pc_common::BASE_DENOM;

/// Environment variable overriding the bech32 precompile base gas.
pub const BECH32_BASE_GAS_ENV: &str = "PC_BECH32_BASE_GAS";

/// Construction parameters of the precompile set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecompileSettings {
    /// Gas charged per bech32 conversion.
    pub bech32_base_gas: u64,
    /// Denomination served by the bank precompile.
    pub bank_denom: String,
}

impl Default for PrecompileSettings {
    fn default() -> Self {
        Self {
            bech32_base_gas: BECH32_PRECOMPILE_BASE_GAS,
            bank_denom: BASE_DENOM.to_string(),
        }
    }
}

impl PrecompileSettings {
    /// Creates settings from environment variables, defaulting what is unset.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Creates settings from `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = lookup(BECH32_BASE_GAS_ENV) {
            settings.bech32_base_gas = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("invalid {BECH32_BASE_GAS_ENV} value {raw:?}"))?;
        }
        if settings.bech32_base_gas == 0 {
            eyre::bail!("{BECH32_BASE_GAS_ENV} must be non-zero");
        }

        Ok(settings)
    }
}
