//! Member identity and descriptors handed out by class editors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::descriptor::ReturnType;
use super::modifiers::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Constructor,
    Method,
}

/// Identity of a declared member within its class: kind, name and descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub kind: MemberKind,
    pub name: String,
    pub signature: String,
}

impl MemberId {
    pub fn new(kind: MemberKind, name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            signature: signature.into(),
        }
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::Field => write!(f, "{}:{}", self.name, self.signature),
            MemberKind::Constructor | MemberKind::Method => {
                write!(f, "{}{}", self.name, self.signature)
            }
        }
    }
}

/// Read-only snapshot of a declared member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    pub id: MemberId,
    pub declaring_class: String,
    pub modifiers: Modifiers,
    /// Present for methods only.
    pub return_type: Option<ReturnType>,
}

impl MemberDescriptor {
    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn signature(&self) -> &str {
        &self.id.signature
    }

    pub fn kind(&self) -> MemberKind {
        self.id.kind
    }

    pub fn return_type_name(&self) -> Option<&str> {
        self.return_type.as_ref().map(|t| t.name.as_str())
    }

    /// `com.acme.Foo.bar(I)V` style name used in logs and errors.
    pub fn long_name(&self) -> String {
        format!("{}.{}", self.declaring_class, self.id)
    }
}
