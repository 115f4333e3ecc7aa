//! Engine settings loaded from TOML.
//!
//! ```toml
//! depth = 3
//! quiescence = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest nominal search the engine accepts.
pub const MAX_DEPTH: u8 = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("search depth {0} is outside 1..={MAX_DEPTH}")]
    InvalidDepth(u8),
}

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Nominal search depth in plies
    pub depth: u8,
    /// Extend leaf nodes with a capture-only search
    pub quiescence: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            quiescence: true,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_DEPTH).contains(&self.depth) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDepth(self.depth))
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
