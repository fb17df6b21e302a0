//! Reference class model provider.
//!
//! Classes are described by JSON `ClassModel` documents stored under `.class`
//! entries of folders or archives. The pool resolves them by name, hands out
//! [`ModelClass`] editors and serializes them back to pretty JSON.

pub mod body_check;
pub mod class_model;
pub mod editor;
pub mod pool;

pub use class_model::{ClassModel, ConstructorModel, FieldModel, MethodModel};
pub use editor::ModelClass;
pub use pool::{ModelClassPool, RUNTIME_SUPPORT_CLASS};
