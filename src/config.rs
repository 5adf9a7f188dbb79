//! Generator configuration loaded from the environment.

use std::path::PathBuf;

/// Attempt ceiling applied when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Tunables for a generation run.
///
/// Values come from `WALLSTAG_*` environment variables and may be
/// overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of candidates tried per `generate_tags` call.
    pub max_attempts: usize,
    /// Fixed seed for the generator's random source. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Newline-delimited file of tags that are already taken.
    pub taken_file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None, taken_file: None }
    }
}

impl GeneratorConfig {
    /// Builds a config from `WALLSTAG_MAX_ATTEMPTS`, `WALLSTAG_SEED` and
    /// `WALLSTAG_TAKEN`, falling back to defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error string if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GeneratorConfig::from_env`] but reading from an arbitrary
    /// key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error string if a numeric variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("WALLSTAG_MAX_ATTEMPTS") {
            config.max_attempts = raw
                .trim()
                .parse()
                .map_err(|e| format!("Invalid WALLSTAG_MAX_ATTEMPTS {raw:?}: {e}"))?;
        }
        if let Some(raw) = lookup("WALLSTAG_SEED") {
            let seed =
                raw.trim().parse().map_err(|e| format!("Invalid WALLSTAG_SEED {raw:?}: {e}"))?;
            config.seed = Some(seed);
        }
        if let Some(raw) = lookup("WALLSTAG_TAKEN") {
            if !raw.trim().is_empty() {
                config.taken_file = Some(PathBuf::from(raw.trim()));
            }
        }
        Ok(config)
    }
}
