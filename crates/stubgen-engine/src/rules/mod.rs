//! Rule documents and the compiled rule set.
//!
//! - `types.rs`: serde schema for TOML/JSON/YAML, XML element mapping
//! - `loader.rs`: format detection, parsing, built-in defaults
//! - `predicate.rs`: anchored patterns and the shared pattern cache
//! - `matcher.rs`: `MemberMatcher`
//! - `rule_set.rs`: `RuleSet` lookups used by the orchestrator

pub mod loader;
pub mod matcher;
pub mod predicate;
pub mod rule_set;
pub mod types;

pub use loader::{load_from_file, load_from_str, load_or_default, RuleFormat};
pub use matcher::MemberMatcher;
pub use predicate::{Pattern, PatternCache};
pub use rule_set::{InjectRule, RuleSet};
pub use types::{generate_json_schema, InjectDef, MethodDef, RuleDocument};
