//! Auxiliary class injection.

pub mod injector;

pub use injector::{ClassInjector, InjectionSummary};
