//! Default body synthesis.

use stubgen_core::{MemberDescriptor, ReturnStrategy, ReturnType, TypeKind};

use crate::rules::MemberMatcher;

/// Expands to the method name as a string literal.
pub const METHOD_PLACEHOLDER: &str = "$method";
/// Expands to the method signature as a string literal.
pub const SIGNATURE_PLACEHOLDER: &str = "$sign";
/// Returns a fresh instance of the declared return type through its no-arg constructor.
pub const INSTANCE_BODY: &str = "return ($r)$type.newInstance();";

/// Zero literal per boxed wrapper type.
const BOXED_ZEROS: &[(&str, &str)] = &[
    ("java.lang.Character", "'\\u0000'"),
    ("java.lang.Integer", "0"),
    ("java.lang.Byte", "(byte)0"),
    ("java.lang.Short", "(short)0"),
    ("java.lang.Long", "0L"),
    ("java.lang.Float", "0.0f"),
    ("java.lang.Double", "0.0"),
    ("java.lang.Boolean", "false"),
];

/// What to do with a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPlan {
    /// Leave the existing body untouched.
    Keep,
    /// Replace the body. `None` asks the class editor for its trivial default.
    Replace(Option<String>),
}

#[derive(Debug, Clone, Copy)]
pub struct BodySynthesizer {
    strategy: ReturnStrategy,
}

impl BodySynthesizer {
    pub fn new(strategy: ReturnStrategy) -> Self {
        Self { strategy }
    }

    /// Decide the body for `member` given the matcher found for it, if any.
    pub fn resolve(&self, member: &MemberDescriptor, matcher: Option<&MemberMatcher>) -> BodyPlan {
        match matcher {
            Some(m) => match m.body() {
                None => BodyPlan::Keep,
                Some(body) => BodyPlan::Replace(Some(substitute_placeholders(
                    body,
                    member.name(),
                    member.signature(),
                ))),
            },
            None => BodyPlan::Replace(self.default_body(member.return_type.as_ref())),
        }
    }

    /// Synthesized body for an unmatched method. `None` means the editor's
    /// trivial default (null, zero or false).
    pub fn default_body(&self, return_type: Option<&ReturnType>) -> Option<String> {
        if self.strategy == ReturnStrategy::Nulls {
            return None;
        }
        let return_type = return_type?;
        match return_type.kind {
            TypeKind::Void | TypeKind::Primitive | TypeKind::Array | TypeKind::Enum => None,
            TypeKind::Reference => Some(match boxed_zero_literal(&return_type.name) {
                Some(zero) => format!("return new {}({zero});", return_type.name),
                None => INSTANCE_BODY.to_string(),
            }),
        }
    }
}

/// Zero-equivalent literal for a boxed wrapper type name.
pub fn boxed_zero_literal(type_name: &str) -> Option<&'static str> {
    BOXED_ZEROS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, zero)| *zero)
}

/// Expand the method name and signature placeholders into string literals.
pub fn substitute_placeholders(body: &str, name: &str, signature: &str) -> String {
    body.replace(METHOD_PLACEHOLDER, &format!("\"{name}\""))
        .replace(SIGNATURE_PLACEHOLDER, &format!("\"{signature}\""))
}
