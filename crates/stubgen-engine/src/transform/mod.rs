//! Transformation orchestration.
//!
//! - `ordering.rs`: input class list assembly and processing order
//! - `report.rs`: run counters
//! - `orchestrator.rs`: the per-class decision state machine

pub mod orchestrator;
pub mod ordering;
pub mod report;

pub use orchestrator::{run, Transformer};
pub use ordering::{input_class_list, order_for_processing};
pub use report::TransformReport;
