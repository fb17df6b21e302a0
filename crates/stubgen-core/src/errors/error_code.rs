//! Stable, machine-readable error codes.

/// Implemented by every stubgen error enum so callers can branch on a stable code
/// instead of matching display strings.
pub trait StubgenErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_PARSE_ERROR: &str = "RULE_PARSE_ERROR";
pub const RULE_EMPTY_MATCHER: &str = "RULE_EMPTY_MATCHER";
pub const RULE_INVALID_PATTERN: &str = "RULE_INVALID_PATTERN";
pub const RULE_CONFLICT: &str = "RULE_CONFLICT";
pub const CLASS_NOT_FOUND: &str = "CLASS_NOT_FOUND";
pub const CLASS_FROZEN: &str = "CLASS_FROZEN";
pub const MEMBER_NOT_FOUND: &str = "MEMBER_NOT_FOUND";
pub const BODY_COMPILE_ERROR: &str = "BODY_COMPILE_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
