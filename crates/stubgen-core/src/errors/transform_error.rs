//! Top-level transformation error.

use super::error_code::{self, StubgenErrorCode};
use super::{ConfigError, ModelError, OutputError, RuleError, SourceError};

/// Any failure that aborts a transformation run.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rule error: {0}")]
    Rules(#[from] RuleError),

    #[error("More than one matcher for method {member} found:\n{}", .matchers.join("\n"))]
    RuleConflict { member: String, matchers: Vec<String> },

    #[error("Failed to load source classes from {path}: {source}")]
    SearchPath {
        path: String,
        #[source]
        source: ModelError,
    },

    #[error("Failed to load class {class}: {source}")]
    ClassLoad {
        class: String,
        #[source]
        source: ModelError,
    },

    #[error("Cannot apply body to method {member}. Source:\n{body}\nCause: {source}")]
    BodyApply {
        member: String,
        body: String,
        #[source]
        source: ModelError,
    },

    #[error("Failed to transform class {class}: {source}")]
    Model {
        class: String,
        #[source]
        source: ModelError,
    },

    #[error("Failed to create class data for {class}: {source}")]
    Serialize {
        class: String,
        #[source]
        source: ModelError,
    },

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl StubgenErrorCode for TransformError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Rules(e) => e.error_code(),
            Self::RuleConflict { .. } => error_code::RULE_CONFLICT,
            Self::SearchPath { source, .. } | Self::ClassLoad { source, .. } => source.error_code(),
            Self::BodyApply { .. } => error_code::BODY_COMPILE_ERROR,
            Self::Model { source, .. } | Self::Serialize { source, .. } => source.error_code(),
            Self::Source(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}
