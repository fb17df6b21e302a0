//! Run configuration errors.

use super::error_code::{self, StubgenErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("No source location configured")]
    NoSources,

    #[error("No output location configured")]
    NoOutput,

    #[error("Unsupported target release {0} (expected 1..=21)")]
    UnsupportedTarget(u8),

    #[error("Unsupported verbosity level {0} (expected 0..=2)")]
    UnsupportedVerbosity(u8),
}

impl StubgenErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
