//! Member matchers: up to four optional constraints plus a replacement body.

use std::fmt;

use stubgen_core::errors::RuleError;
use stubgen_core::MemberDescriptor;

use super::predicate::{Pattern, PatternCache};
use super::types::MethodDef;

/// A compiled member matching rule.
///
/// Matching is the AND of the present constraints. Class and member names are
/// full regex matches; signature and return type are exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMatcher {
    index: usize,
    class_name: Option<Pattern>,
    method_name: Option<Pattern>,
    signature: Option<String>,
    return_type: Option<String>,
    body: Option<String>,
}

impl MemberMatcher {
    /// Compile the matcher declared at position `index`. Empty strings count
    /// as absent constraints. A matcher left with no constraint is rejected.
    pub fn compile(index: usize, def: &MethodDef, cache: &mut PatternCache) -> Result<Self, RuleError> {
        let class_name = non_empty(&def.class_name)
            .map(|p| cache.get_or_compile(p, &format!("methods[{index}].class_name")))
            .transpose()?;
        let method_name = non_empty(&def.method_name)
            .map(|p| cache.get_or_compile(p, &format!("methods[{index}].method_name")))
            .transpose()?;

        let matcher = Self {
            index,
            class_name,
            method_name,
            signature: non_empty(&def.signature).map(str::to_string),
            return_type: non_empty(&def.return_type).map(str::to_string),
            body: if def.keep { None } else { def.body.clone() },
        };

        if matcher.is_missing_conditions() {
            return Err(RuleError::EmptyMatcher {
                index,
                repr: matcher.repr(),
            });
        }
        Ok(matcher)
    }

    /// Declaration position within the rule document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_missing_conditions(&self) -> bool {
        self.class_name.is_none()
            && self.method_name.is_none()
            && self.signature.is_none()
            && self.return_type.is_none()
    }

    pub fn is_matching(&self, member: &MemberDescriptor) -> bool {
        self.signature
            .as_deref()
            .map_or(true, |s| s == member.signature())
            && self
                .class_name
                .as_ref()
                .map_or(true, |p| p.matches(&member.declaring_class))
            && self
                .method_name
                .as_ref()
                .map_or(true, |p| p.matches(member.name()))
            && self
                .return_type
                .as_deref()
                .map_or(true, |r| member.return_type_name() == Some(r))
    }

    /// Replacement body, or `None` to keep the existing one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn keeps_body(&self) -> bool {
        self.body.is_none()
    }

    /// Constraint summary used in conflict and validation diagnostics.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MemberMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: Option<&str>) -> String {
            value.map_or_else(|| "-".to_string(), |v| format!("'{v}'"))
        }
        write!(
            f,
            "matcher #{} {{ class_name: {}, method_name: {}, signature: {}, return_type: {} }}",
            self.index,
            field(self.class_name.as_ref().map(Pattern::as_str)),
            field(self.method_name.as_ref().map(Pattern::as_str)),
            field(self.signature.as_deref()),
            field(self.return_type.as_deref()),
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
