//! Rules configuration

mod rules;

pub use rules::RulesConfig;

use thiserror::Error;

/// Failure to load a rules file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read rules file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("malformed rules TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid rules: {0}")]
    ValidationError(String),
}
