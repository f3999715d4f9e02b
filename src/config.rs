//! Generator configuration.
//!
//! Controls the search loop: attempt budget, early-exit policy and an
//! optional random seed for reproducible rosters.
//!
//! ```
//! use u_roster::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     max_attempts = 250
//!     stop_on_first_feasible = false
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.max_attempts, 250);
//! assert!(!config.stop_on_first_feasible);
//! assert_eq!(config.random_seed, Some(7));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Default attempt budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Search loop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Maximum number of construction attempts.
    pub max_attempts: usize,
    /// Return the first fully staffed attempt immediately instead of
    /// spending the remaining budget looking for a higher score.
    pub stop_on_first_feasible: bool,
    /// Seed for reproducible generation. `None` draws from the OS.
    pub random_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            stop_on_first_feasible: true,
            random_seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and checks configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and checks configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects unusable values.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(RosterError::InvalidConfig(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Sets the attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the early-exit policy.
    pub fn with_stop_on_first_feasible(mut self, stop: bool) -> Self {
        self.stop_on_first_feasible = stop;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}
