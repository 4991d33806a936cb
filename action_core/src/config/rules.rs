//! Tunable resolution rules

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Constants used while resolving actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Added to accuracy (attacks) or power (conditions) to form `TO_HIT`
    #[serde(default = "default_base_to_hit")]
    pub base_to_hit: i64,
    /// Sides of the percentile check die. An attack whose effective to-hit
    /// reaches this value lands without a roll.
    #[serde(default = "default_check_die")]
    pub check_die: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            base_to_hit: default_base_to_hit(),
            check_die: default_check_die(),
        }
    }
}

fn default_base_to_hit() -> i64 {
    100
}

fn default_check_die() -> i64 {
    100
}

impl RulesConfig {
    /// Load and validate rules from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate rules from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: RulesConfig = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_die < 1 {
            return Err(ConfigError::ValidationError(format!(
                "check_die must be at least 1, got {}",
                self.check_die
            )));
        }
        Ok(())
    }
}
