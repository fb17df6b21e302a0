//! Collaborator traits the transformation engine depends on.
//!
//! The engine never touches class bytes, archives or directories directly:
//! it goes through these seams so tests can substitute doubles.

pub mod lister;
pub mod model;
pub mod writer;

pub use lister::ClassLister;
pub use model::{ClassEditor, ClassModelProvider};
pub use writer::ClassWriter;
