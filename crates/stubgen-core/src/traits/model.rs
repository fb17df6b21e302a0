//! Class model provider and class editor traits.
//!
//! A provider owns the class-resolution namespace for one run. The orchestrator
//! borrows one class at a time from it, edits it through [`ClassEditor`] and
//! serializes it, which freezes it inside the namespace.

use std::path::Path;

use crate::errors::ModelError;
use crate::types::member::{MemberDescriptor, MemberId};
use crate::types::modifiers::Modifiers;

pub trait ClassModelProvider {
    type Class: ClassEditor;

    /// Add a folder or archive to the class search path.
    fn append_search_path(&mut self, location: &Path) -> Result<(), ModelError>;

    /// Add the platform's own classes to the search path.
    fn append_system_path(&mut self) -> Result<(), ModelError>;

    /// Resolve a class by qualified name. Repeated calls return the same
    /// (possibly already edited or frozen) class.
    fn get(&mut self, class_name: &str) -> Result<&mut Self::Class, ModelError>;

    /// The support class the editing runtime needs next to generated bodies.
    fn runtime_support_class(&mut self) -> Result<&mut Self::Class, ModelError>;
}

/// Uniform read/mutate surface over one class and its declared members.
pub trait ClassEditor {
    fn name(&self) -> &str;

    fn modifiers(&self) -> Modifiers;

    fn set_modifiers(&mut self, modifiers: Modifiers) -> Result<(), ModelError>;

    /// Already serialized; no further mutation is possible.
    fn is_frozen(&self) -> bool;

    fn is_interface(&self) -> bool {
        self.modifiers().is_interface()
    }

    fn declared_fields(&self) -> Vec<MemberDescriptor>;

    fn declared_constructors(&self) -> Vec<MemberDescriptor>;

    fn declared_methods(&self) -> Vec<MemberDescriptor>;

    fn set_member_modifiers(
        &mut self,
        member: &MemberId,
        modifiers: Modifiers,
    ) -> Result<(), ModelError>;

    /// Replace the body of a method or constructor. `None` requests the
    /// editor's trivial default body.
    fn set_body(&mut self, member: &MemberId, body: Option<&str>) -> Result<(), ModelError>;

    fn remove_member(&mut self, member: &MemberId) -> Result<(), ModelError>;

    /// Stamp a class-format major version before serialization.
    fn set_major_version(&mut self, major: u16) -> Result<(), ModelError>;

    /// Serialize the class and freeze it.
    fn to_bytes(&mut self) -> Result<Vec<u8>, ModelError>;
}
