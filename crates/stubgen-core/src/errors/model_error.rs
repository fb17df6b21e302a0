//! Class model provider errors.

use super::error_code::{self, StubgenErrorCode};

/// Failures reported by a [`ClassModelProvider`](crate::traits::ClassModelProvider)
/// or one of its [`ClassEditor`](crate::traits::ClassEditor)s.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Class {0} is frozen and cannot be modified")]
    Frozen(String),

    #[error("Member {member} not found in class {class}")]
    MemberNotFound { class: String, member: String },

    #[error("Cannot compile body for {member}: {message}")]
    Compile { member: String, message: String },

    #[error("Invalid search path entry {path}: {message}")]
    SearchPath { path: String, message: String },

    #[error("Malformed class descriptor for {class}: {message}")]
    Malformed { class: String, message: String },
}

impl StubgenErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ClassNotFound(_) => error_code::CLASS_NOT_FOUND,
            Self::Frozen(_) => error_code::CLASS_FROZEN,
            Self::MemberNotFound { .. } => error_code::MEMBER_NOT_FOUND,
            Self::Compile { .. } => error_code::BODY_COMPILE_ERROR,
            _ => error_code::MODEL_ERROR,
        }
    }
}
