//! # stubgen-engine
//!
//! Rule-driven class stub transformation.
//!
//! - `rules`: rule document model, loader and the compiled [`RuleSet`]
//! - `body`: default body synthesis and placeholder substitution
//! - `transform`: the per-class decision state machine ([`Transformer`])
//! - `inject`: auxiliary class injection
//! - `io`: folder/archive listers and writers
//! - `model`: reference class model provider over JSON class descriptors

pub mod body;
pub mod inject;
pub mod io;
pub mod model;
pub mod rules;
pub mod transform;

pub use body::{BodyPlan, BodySynthesizer};
pub use inject::ClassInjector;
pub use io::{open_writer, SourceKind, SourceLister};
pub use model::ModelClassPool;
pub use rules::{MemberMatcher, RuleSet};
pub use transform::{TransformReport, Transformer};
