//! Rule document errors. All of these are configuration errors: they fail the
//! run before any class is processed.

use super::error_code::{self, StubgenErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Failed to read rule document {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {format} rule document: {message}")]
    Parse { format: String, message: String },

    #[error("Unsupported rule document format for {path}")]
    UnsupportedFormat { path: String },

    #[error("Matcher with no conditions at position {index}: {repr}")]
    EmptyMatcher { index: usize, repr: String },

    #[error("Invalid pattern '{pattern}' in {location}: {message}")]
    InvalidPattern {
        pattern: String,
        location: String,
        message: String,
    },
}

impl StubgenErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMatcher { .. } => error_code::RULE_EMPTY_MATCHER,
            Self::InvalidPattern { .. } => error_code::RULE_INVALID_PATTERN,
            _ => error_code::RULE_PARSE_ERROR,
        }
    }
}
