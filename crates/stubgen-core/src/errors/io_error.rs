//! Input listing and output writing errors.

use super::error_code::{self, StubgenErrorCode};

/// Errors raised while enumerating or reading classes from a source location.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source location not found: {0}")]
    NotFound(String),

    #[error("Failed to read source {path}: {message}")]
    Read { path: String, message: String },

    #[error("Class {class} not present in {path}")]
    MissingClass { path: String, class: String },
}

impl StubgenErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}

/// Errors raised while persisting output classes.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Writer for {0} is already closed")]
    Closed(String),
}

impl StubgenErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        error_code::OUTPUT_ERROR
    }
}
