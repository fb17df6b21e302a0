//! # stubgen-core
//!
//! Foundation crate for the stubgen engine.
//! Defines the class/member descriptor types, collaborator traits, errors,
//! configuration and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ReturnStrategy, StubgenConfig, TargetVersion, TransformConfig};
pub use errors::error_code::StubgenErrorCode;
pub use traits::{ClassEditor, ClassLister, ClassModelProvider, ClassWriter};
pub use types::descriptor::{ReturnType, TypeKind};
pub use types::member::{MemberDescriptor, MemberId, MemberKind};
pub use types::modifiers::Modifiers;
