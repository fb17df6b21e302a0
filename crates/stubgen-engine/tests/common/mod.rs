//! Shared fixtures for stubgen-engine integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

use stubgen_core::errors::{ModelError, OutputError, SourceError};
use stubgen_core::{
    ClassEditor, ClassLister, ClassModelProvider, ClassWriter, MemberDescriptor, MemberId,
    MemberKind, Modifiers, ReturnType, TransformConfig,
};
use stubgen_engine::model::{ClassModel, ModelClass, RUNTIME_SUPPORT_CLASS};
use stubgen_engine::rules::{load_from_str, RuleFormat, RuleSet};

pub fn rules_from_toml(toml: &str) -> RuleSet {
    load_from_str(toml, RuleFormat::Toml).expect("rules should load")
}

pub fn method(class: &str, name: &str, signature: &str) -> MemberDescriptor {
    MemberDescriptor {
        id: MemberId::new(MemberKind::Method, name, signature),
        declaring_class: class.to_string(),
        modifiers: Modifiers::PUBLIC,
        return_type: ReturnType::from_signature(signature),
    }
}

pub fn config(sources: &[&str]) -> TransformConfig {
    TransformConfig {
        sources: sources.iter().map(PathBuf::from).collect(),
        output: Some(PathBuf::from("out")),
        ..Default::default()
    }
}

pub fn class_bytes(model: &ClassModel) -> Vec<u8> {
    serde_json::to_vec_pretty(model).expect("serializable model")
}

pub fn parse_class(bytes: &[u8]) -> ClassModel {
    serde_json::from_slice(bytes).expect("output should be a class descriptor")
}

/// Class lister over in-memory locations.
#[derive(Debug, Default)]
pub struct MemoryLister {
    locations: BTreeMap<PathBuf, Vec<(String, Vec<u8>)>>,
    unreadable: HashSet<PathBuf>,
}

impl MemoryLister {
    pub fn with_classes(mut self, location: &str, models: &[ClassModel]) -> Self {
        let entries = self.locations.entry(PathBuf::from(location)).or_default();
        for model in models {
            entries.push((model.name.clone(), class_bytes(model)));
        }
        self
    }

    pub fn with_unreadable(mut self, location: &str) -> Self {
        self.unreadable.insert(PathBuf::from(location));
        self
    }
}

impl ClassLister for MemoryLister {
    fn list(&self, location: &Path) -> Result<Vec<String>, SourceError> {
        if self.unreadable.contains(location) {
            return Err(SourceError::Read {
                path: location.display().to_string(),
                message: "unreadable".to_string(),
            });
        }
        self.locations
            .get(location)
            .map(|entries| entries.iter().map(|(name, _)| name.clone()).collect())
            .ok_or_else(|| SourceError::NotFound(location.display().to_string()))
    }

    fn read_class(&self, location: &Path, class_name: &str) -> Result<Vec<u8>, SourceError> {
        self.locations
            .get(location)
            .and_then(|entries| entries.iter().find(|(name, _)| name == class_name))
            .map(|(_, data)| data.clone())
            .ok_or_else(|| SourceError::MissingClass {
                path: location.display().to_string(),
                class: class_name.to_string(),
            })
    }
}

/// Records written classes in order.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub classes: Vec<(String, Vec<u8>)>,
    pub closed: bool,
    pub reject: HashSet<String>,
}

impl MemoryWriter {
    pub fn names(&self) -> Vec<&str> {
        self.classes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn class(&self, name: &str) -> ClassModel {
        let (_, data) = self
            .classes
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("class {name} not written"));
        parse_class(data)
    }

    pub fn raw(&self, name: &str) -> &[u8] {
        self.classes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.as_slice())
            .unwrap_or_else(|| panic!("class {name} not written"))
    }
}

impl ClassWriter for MemoryWriter {
    fn add_class(&mut self, class_name: &str, data: &[u8]) -> Result<(), OutputError> {
        if self.closed {
            return Err(OutputError::Closed("memory".to_string()));
        }
        if self.reject.contains(class_name) {
            return Err(OutputError::Write {
                path: class_name.to_string(),
                message: "rejected".to_string(),
            });
        }
        self.classes.push((class_name.to_string(), data.to_vec()));
        Ok(())
    }

    fn close(&mut self) -> Result<(), OutputError> {
        self.closed = true;
        Ok(())
    }
}

/// A class editor that can be told to fail specific operations.
#[derive(Debug)]
pub struct FaultyClass {
    inner: ModelClass,
    fail_constructor_bodies: bool,
}

impl ClassEditor for FaultyClass {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn modifiers(&self) -> Modifiers {
        self.inner.modifiers()
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) -> Result<(), ModelError> {
        self.inner.set_modifiers(modifiers)
    }

    fn is_frozen(&self) -> bool {
        self.inner.is_frozen()
    }

    fn declared_fields(&self) -> Vec<MemberDescriptor> {
        self.inner.declared_fields()
    }

    fn declared_constructors(&self) -> Vec<MemberDescriptor> {
        self.inner.declared_constructors()
    }

    fn declared_methods(&self) -> Vec<MemberDescriptor> {
        self.inner.declared_methods()
    }

    fn set_member_modifiers(&mut self, member: &MemberId, modifiers: Modifiers) -> Result<(), ModelError> {
        self.inner.set_member_modifiers(member, modifiers)
    }

    fn set_body(&mut self, member: &MemberId, body: Option<&str>) -> Result<(), ModelError> {
        if self.fail_constructor_bodies && member.kind == MemberKind::Constructor {
            return Err(ModelError::Compile {
                member: member.to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.inner.set_body(member, body)
    }

    fn remove_member(&mut self, member: &MemberId) -> Result<(), ModelError> {
        self.inner.remove_member(member)
    }

    fn set_major_version(&mut self, major: u16) -> Result<(), ModelError> {
        self.inner.set_major_version(major)
    }

    fn to_bytes(&mut self) -> Result<Vec<u8>, ModelError> {
        self.inner.to_bytes()
    }
}

/// In-memory class model provider with fault injection. Search path entries
/// are recorded but never checked on disk.
#[derive(Debug, Default)]
pub struct FaultyProvider {
    classes: HashMap<String, FaultyClass>,
    pub search_path: Vec<PathBuf>,
    pub system_path_appended: bool,
    pub fail_support_class: bool,
    pub fail_search_path: bool,
}

impl FaultyProvider {
    pub fn with(mut self, model: ClassModel) -> Self {
        self.insert(model, false);
        self
    }

    pub fn with_failing_constructors(mut self, model: ClassModel) -> Self {
        self.insert(model, true);
        self
    }

    fn insert(&mut self, model: ClassModel, fail_constructor_bodies: bool) {
        self.classes.insert(
            model.name.clone(),
            FaultyClass {
                inner: ModelClass::new(model),
                fail_constructor_bodies,
            },
        );
    }
}

impl ClassModelProvider for FaultyProvider {
    type Class = FaultyClass;

    fn append_search_path(&mut self, location: &Path) -> Result<(), ModelError> {
        if self.fail_search_path {
            return Err(ModelError::SearchPath {
                path: location.display().to_string(),
                message: "injected failure".to_string(),
            });
        }
        self.search_path.push(location.to_path_buf());
        Ok(())
    }

    fn append_system_path(&mut self) -> Result<(), ModelError> {
        self.system_path_appended = true;
        Ok(())
    }

    fn get(&mut self, class_name: &str) -> Result<&mut FaultyClass, ModelError> {
        self.classes
            .get_mut(class_name)
            .ok_or_else(|| ModelError::ClassNotFound(class_name.to_string()))
    }

    fn runtime_support_class(&mut self) -> Result<&mut FaultyClass, ModelError> {
        if self.fail_support_class {
            return Err(ModelError::ClassNotFound(RUNTIME_SUPPORT_CLASS.to_string()));
        }
        if !self.classes.contains_key(RUNTIME_SUPPORT_CLASS) {
            self.insert(ClassModel::new(RUNTIME_SUPPORT_CLASS, Modifiers::PUBLIC), false);
        }
        self.get(RUNTIME_SUPPORT_CLASS)
    }
}
