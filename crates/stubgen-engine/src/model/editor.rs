//! `ClassEditor` over an in-memory `ClassModel`.

use rustc_hash::FxHashSet;
use stubgen_core::errors::ModelError;
use stubgen_core::{
    ClassEditor, MemberDescriptor, MemberId, MemberKind, Modifiers, ReturnType,
};

use super::body_check::{check_body, trivial_body};
use super::class_model::{ClassModel, CONSTRUCTOR_NAME};

/// One class in the pool namespace.
#[derive(Debug, Clone)]
pub struct ModelClass {
    model: ClassModel,
    frozen: bool,
    /// Reference return types known to be enumerations.
    enum_types: FxHashSet<String>,
    enums_resolved: bool,
}

impl ModelClass {
    pub fn new(model: ClassModel) -> Self {
        Self {
            model,
            frozen: false,
            enum_types: FxHashSet::default(),
            enums_resolved: false,
        }
    }

    pub fn model(&self) -> &ClassModel {
        &self.model
    }

    /// Distinct reference return type names of the declared methods.
    pub(crate) fn reference_return_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .model
            .methods
            .iter()
            .filter_map(|m| ReturnType::from_signature(&m.signature))
            .filter(ReturnType::is_reference)
            .map(|t| t.name)
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub(crate) fn enums_resolved(&self) -> bool {
        self.enums_resolved
    }

    pub(crate) fn set_enum_types(&mut self, enum_types: FxHashSet<String>) {
        self.enum_types = enum_types;
        self.enums_resolved = true;
    }

    fn ensure_mutable(&self) -> Result<(), ModelError> {
        if self.frozen {
            return Err(ModelError::Frozen(self.model.name.clone()));
        }
        Ok(())
    }

    fn not_found(&self, member: &MemberId) -> ModelError {
        ModelError::MemberNotFound {
            class: self.model.name.clone(),
            member: member.to_string(),
        }
    }

    fn return_type_of(&self, signature: &str) -> Option<ReturnType> {
        ReturnType::from_signature(signature).map(|t| {
            if t.is_reference() && self.enum_types.contains(&t.name) {
                t.into_enum()
            } else {
                t
            }
        })
    }

    fn descriptor(&self, id: MemberId, modifiers: Modifiers, return_type: Option<ReturnType>) -> MemberDescriptor {
        MemberDescriptor {
            id,
            declaring_class: self.model.name.clone(),
            modifiers,
            return_type,
        }
    }
}

impl ClassEditor for ModelClass {
    fn name(&self) -> &str {
        &self.model.name
    }

    fn modifiers(&self) -> Modifiers {
        self.model.modifiers
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        self.model.modifiers = modifiers;
        Ok(())
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn declared_fields(&self) -> Vec<MemberDescriptor> {
        self.model
            .fields
            .iter()
            .map(|f| {
                self.descriptor(
                    MemberId::new(MemberKind::Field, &f.name, &f.descriptor),
                    f.modifiers,
                    None,
                )
            })
            .collect()
    }

    fn declared_constructors(&self) -> Vec<MemberDescriptor> {
        self.model
            .constructors
            .iter()
            .map(|c| {
                self.descriptor(
                    MemberId::new(MemberKind::Constructor, CONSTRUCTOR_NAME, &c.signature),
                    c.modifiers,
                    None,
                )
            })
            .collect()
    }

    fn declared_methods(&self) -> Vec<MemberDescriptor> {
        self.model
            .methods
            .iter()
            .map(|m| {
                self.descriptor(
                    MemberId::new(MemberKind::Method, &m.name, &m.signature),
                    m.modifiers,
                    self.return_type_of(&m.signature),
                )
            })
            .collect()
    }

    fn set_member_modifiers(&mut self, member: &MemberId, modifiers: Modifiers) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        let slot = match member.kind {
            MemberKind::Field => self
                .model
                .fields
                .iter_mut()
                .find(|f| f.name == member.name && f.descriptor == member.signature)
                .map(|f| &mut f.modifiers),
            MemberKind::Constructor => self
                .model
                .constructors
                .iter_mut()
                .find(|c| c.signature == member.signature)
                .map(|c| &mut c.modifiers),
            MemberKind::Method => self
                .model
                .methods
                .iter_mut()
                .find(|m| m.name == member.name && m.signature == member.signature)
                .map(|m| &mut m.modifiers),
        };
        match slot {
            Some(slot) => {
                *slot = modifiers;
                Ok(())
            }
            None => Err(self.not_found(member)),
        }
    }

    fn set_body(&mut self, member: &MemberId, body: Option<&str>) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        if let Some(text) = body {
            check_body(text).map_err(|message| ModelError::Compile {
                member: format!("{}.{member}", self.model.name),
                message,
            })?;
        }

        match member.kind {
            MemberKind::Field => Err(self.not_found(member)),
            MemberKind::Constructor => {
                let slot = self
                    .model
                    .constructors
                    .iter_mut()
                    .find(|c| c.signature == member.signature);
                match slot {
                    Some(ctor) => {
                        ctor.body = Some(body.map_or_else(|| trivial_body(None), str::to_string));
                        Ok(())
                    }
                    None => Err(self.not_found(member)),
                }
            }
            MemberKind::Method => {
                let return_type = self.return_type_of(&member.signature);
                let class_name = self.model.name.clone();
                let Some(method) = self
                    .model
                    .methods
                    .iter_mut()
                    .find(|m| m.name == member.name && m.signature == member.signature)
                else {
                    return Err(self.not_found(member));
                };
                if method.modifiers.is_abstract() || method.modifiers.is_native() {
                    return Err(ModelError::Compile {
                        member: format!("{class_name}.{member}"),
                        message: "abstract or native method cannot have a body".to_string(),
                    });
                }
                method.body = Some(body.map_or_else(|| trivial_body(return_type.as_ref()), str::to_string));
                Ok(())
            }
        }
    }

    fn remove_member(&mut self, member: &MemberId) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        let before = self.member_count();
        match member.kind {
            MemberKind::Field => self
                .model
                .fields
                .retain(|f| !(f.name == member.name && f.descriptor == member.signature)),
            MemberKind::Constructor => self
                .model
                .constructors
                .retain(|c| c.signature != member.signature),
            MemberKind::Method => self
                .model
                .methods
                .retain(|m| !(m.name == member.name && m.signature == member.signature)),
        }
        if self.member_count() == before {
            return Err(self.not_found(member));
        }
        Ok(())
    }

    fn set_major_version(&mut self, major: u16) -> Result<(), ModelError> {
        self.ensure_mutable()?;
        self.model.major_version = Some(major);
        Ok(())
    }

    fn to_bytes(&mut self) -> Result<Vec<u8>, ModelError> {
        self.ensure_mutable()?;
        let mut bytes = serde_json::to_vec_pretty(&self.model).map_err(|e| ModelError::Malformed {
            class: self.model.name.clone(),
            message: e.to_string(),
        })?;
        bytes.push(b'\n');
        self.frozen = true;
        Ok(bytes)
    }
}

impl ModelClass {
    fn member_count(&self) -> usize {
        self.model.fields.len() + self.model.constructors.len() + self.model.methods.len()
    }
}
