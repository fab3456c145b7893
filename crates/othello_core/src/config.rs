//! Player configuration loaded from TOML.
//!
//! ```toml
//! kind = "greedy"
//! side = "black"
//! seed = 7        # optional, only used by the random player
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::types::Side;

/// Which move-selection strategy to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Greedy,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub kind: PlayerKind,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read player config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse player config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PlayerConfig {
    pub fn new(kind: PlayerKind, side: Side) -> Self {
        Self {
            kind,
            side,
            seed: None,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
