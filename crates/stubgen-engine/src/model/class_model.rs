//! Serde types for class descriptor documents.

use serde::{Deserialize, Serialize};
use stubgen_core::Modifiers;

/// Name used for constructors in member identities.
pub const CONSTRUCTOR_NAME: &str = "<init>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_version: Option<u16>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub constructors: Vec<ConstructorModel>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            modifiers,
            major_version: None,
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, descriptor: &str, modifiers: Modifiers) -> Self {
        self.fields.push(FieldModel {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            modifiers,
        });
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, signature: &str, modifiers: Modifiers, body: &str) -> Self {
        self.constructors.push(ConstructorModel {
            signature: signature.to_string(),
            modifiers,
            body: Some(body.to_string()),
        });
        self
    }

    #[must_use]
    pub fn with_method(
        mut self,
        name: &str,
        signature: &str,
        modifiers: Modifiers,
        body: Option<&str>,
    ) -> Self {
        self.methods.push(MethodModel {
            name: name.to_string(),
            signature: signature.to_string(),
            modifiers,
            body: body.map(str::to_string),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    pub descriptor: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorModel {
    pub signature: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub signature: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Absent for abstract and native methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
