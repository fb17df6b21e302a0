//! `ClassModelProvider` over class descriptor documents on a search path.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use stubgen_core::errors::{ModelError, SourceError};
use stubgen_core::{ClassEditor, ClassModelProvider, Modifiers};

use super::class_model::ClassModel;
use super::editor::ModelClass;
use crate::io::ClassSource;

/// Support class the generated bodies rely on at runtime.
pub const RUNTIME_SUPPORT_CLASS: &str = "stubgen.runtime.Desc";

/// Resolution namespace for one run. Classes are loaded lazily from the
/// search path (first entry holding the class wins) and cached, so a class
/// serialized once stays frozen for the rest of the run. Each search path
/// entry is opened once when appended.
#[derive(Debug, Default)]
pub struct ModelClassPool {
    search_path: Vec<ClassSource>,
    classes: FxHashMap<String, ModelClass>,
    missing: FxHashSet<String>,
}

impl ModelClassPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an in-memory class, replacing any cached one of the same name.
    pub fn insert(&mut self, model: ClassModel) {
        self.missing.remove(&model.name);
        self.classes.insert(model.name.clone(), ModelClass::new(model));
    }

    fn ensure_loaded(&mut self, class_name: &str) -> Result<(), ModelError> {
        if self.classes.contains_key(class_name) {
            return Ok(());
        }
        if self.missing.contains(class_name) {
            return Err(ModelError::ClassNotFound(class_name.to_string()));
        }

        for source in &mut self.search_path {
            let location = source.path().to_path_buf();
            let data = match source.read_class(class_name) {
                Ok(data) => data,
                Err(SourceError::MissingClass { .. }) => continue,
                Err(e) => {
                    return Err(ModelError::SearchPath {
                        path: location.display().to_string(),
                        message: e.to_string(),
                    })
                }
            };
            let model: ClassModel = serde_json::from_slice(&data).map_err(|e| ModelError::Malformed {
                class: class_name.to_string(),
                message: e.to_string(),
            })?;
            if model.name != class_name {
                return Err(ModelError::Malformed {
                    class: class_name.to_string(),
                    message: format!("descriptor declares class {}", model.name),
                });
            }
            tracing::trace!(class = class_name, location = %location.display(), "loaded class descriptor");
            self.classes.insert(class_name.to_string(), ModelClass::new(model));
            return Ok(());
        }

        self.missing.insert(class_name.to_string());
        Err(ModelError::ClassNotFound(class_name.to_string()))
    }

    /// Classify the reference return types of `class_name` as enums where the
    /// returned class resolves and carries the enum flag. Types that fail to
    /// load for any reason stay plain references.
    fn resolve_enum_returns(&mut self, class_name: &str) {
        let candidates = match self.classes.get(class_name) {
            Some(class) if !class.enums_resolved() => class.reference_return_types(),
            _ => return,
        };

        let mut enum_types = FxHashSet::default();
        for candidate in candidates {
            let is_enum = match self.ensure_loaded(&candidate) {
                Ok(()) => self
                    .classes
                    .get(&candidate)
                    .is_some_and(|c| c.modifiers().is_enum()),
                Err(ModelError::ClassNotFound(_)) => false,
                Err(error) => {
                    tracing::debug!(class = class_name, return_type = %candidate, %error, "return type not resolvable, treated as reference");
                    false
                }
            };
            if is_enum {
                enum_types.insert(candidate);
            }
        }

        if let Some(class) = self.classes.get_mut(class_name) {
            class.set_enum_types(enum_types);
        }
    }

    fn class_mut(&mut self, class_name: &str) -> Result<&mut ModelClass, ModelError> {
        self.classes
            .get_mut(class_name)
            .ok_or_else(|| ModelError::ClassNotFound(class_name.to_string()))
    }
}

impl ClassModelProvider for ModelClassPool {
    type Class = ModelClass;

    fn append_search_path(&mut self, location: &Path) -> Result<(), ModelError> {
        let source = ClassSource::open(location).map_err(|e| ModelError::SearchPath {
            path: location.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(location = %location.display(), kind = ?source.kind(), "appended search path");
        self.search_path.push(source);
        // Earlier misses may now resolve.
        self.missing.clear();
        Ok(())
    }

    fn append_system_path(&mut self) -> Result<(), ModelError> {
        tracing::trace!("no platform class descriptors bundled; system path is empty");
        Ok(())
    }

    fn get(&mut self, class_name: &str) -> Result<&mut ModelClass, ModelError> {
        self.ensure_loaded(class_name)?;
        self.resolve_enum_returns(class_name);
        self.class_mut(class_name)
    }

    fn runtime_support_class(&mut self) -> Result<&mut ModelClass, ModelError> {
        if !self.classes.contains_key(RUNTIME_SUPPORT_CLASS) {
            let model = ClassModel::new(RUNTIME_SUPPORT_CLASS, Modifiers::PUBLIC | Modifiers::FINAL)
                .with_constructor("()V", Modifiers::PRIVATE, "{}")
                .with_method(
                    "getClazz",
                    "(Ljava/lang/String;)Ljava/lang/Class;",
                    Modifiers::PUBLIC | Modifiers::STATIC,
                    Some("return java.lang.Class.forName($1);"),
                )
                .with_method(
                    "getParams",
                    "(Ljava/lang/String;)[Ljava/lang/Class;",
                    Modifiers::PUBLIC | Modifiers::STATIC,
                    Some("return new java.lang.Class[0];"),
                );
            self.insert(model);
        }
        self.class_mut(RUNTIME_SUPPORT_CLASS)
    }
}
