//! Error types for every stubgen subsystem.
//! One enum per concern, all implementing [`StubgenErrorCode`](error_code::StubgenErrorCode).

pub mod config_error;
pub mod error_code;
pub mod io_error;
pub mod model_error;
pub mod rule_error;
pub mod transform_error;

pub use config_error::ConfigError;
pub use io_error::{OutputError, SourceError};
pub use model_error::ModelError;
pub use rule_error::RuleError;
pub use transform_error::TransformError;
