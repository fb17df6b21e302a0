//! Run configuration.
//!
//! `StubgenConfig` is the on-disk TOML document; `TransformConfig` is the resolved
//! set of run options the orchestrator consumes.

pub mod transform_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use transform_config::{ReturnStrategy, TargetVersion, TransformConfig};

/// Top-level configuration file (`stubgen.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StubgenConfig {
    pub transform: TransformConfig,
}

impl StubgenConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }
}
