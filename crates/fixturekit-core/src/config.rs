//! Environment configuration for the shared random source.

use crate::error::ConfigError;

/// Environment variable holding an explicit seed for reproducible runs.
pub const SEED_VAR: &str = "FIXTUREKIT_SEED";

/// Configuration for constructing a `SeededRng`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RngConfig {
    /// Explicit seed. `None` means a fresh seed is drawn from entropy.
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Configuration pinned to a specific seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if `FIXTUREKIT_SEED` is set to
    /// something other than a decimal `u64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// An unset or blank variable leaves the seed unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSeed` if the seed variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(SEED_VAR) else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let seed = trimmed
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidSeed {
                variable: SEED_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self::seeded(seed))
    }
}
