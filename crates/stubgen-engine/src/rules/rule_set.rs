//! The compiled, immutable rule set consulted by the orchestrator.

use std::path::{Path, PathBuf};

use smallvec::SmallVec;
use stubgen_core::errors::{RuleError, TransformError};
use stubgen_core::MemberDescriptor;

use super::matcher::MemberMatcher;
use super::predicate::{matches_any, Pattern, PatternCache};
use super::types::RuleDocument;

/// Copy classes whose name matches any pattern from `source` into the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectRule {
    source: PathBuf,
    patterns: Vec<Pattern>,
}

impl InjectRule {
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn matches(&self, class_name: &str) -> bool {
        matches_any(&self.patterns, class_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    strip_patterns: Vec<Pattern>,
    skip_patterns: Vec<Pattern>,
    matchers: Vec<MemberMatcher>,
    inject_rules: Vec<InjectRule>,
}

impl RuleSet {
    /// Compile and validate a parsed rule document. Every pattern is compiled
    /// here, so matching never fails later.
    pub fn from_document(doc: &RuleDocument) -> Result<Self, RuleError> {
        let mut cache = PatternCache::new();

        let strip_patterns = compile_all(&doc.strip_classes, "strip_classes", &mut cache)?;
        let skip_patterns = compile_all(&doc.skip_classes, "skip_classes", &mut cache)?;

        let matchers = doc
            .methods
            .iter()
            .enumerate()
            .map(|(index, def)| MemberMatcher::compile(index, def, &mut cache))
            .collect::<Result<Vec<_>, _>>()?;

        let inject_rules = doc
            .inject
            .iter()
            .enumerate()
            .map(|(i, def)| -> Result<InjectRule, RuleError> {
                Ok(InjectRule {
                    source: PathBuf::from(&def.path),
                    patterns: compile_all(&def.classes, &format!("inject[{i}].classes"), &mut cache)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            strip = strip_patterns.len(),
            skip = skip_patterns.len(),
            matchers = matchers.len(),
            inject = inject_rules.len(),
            distinct_patterns = cache.len(),
            "rule set compiled"
        );

        Ok(Self {
            strip_patterns,
            skip_patterns,
            matchers,
            inject_rules,
        })
    }

    /// The single matcher applying to `member`.
    ///
    /// Several matches are a [`TransformError::RuleConflict`] unless
    /// `ignore_duplicates` is set, in which case the first declared one wins.
    pub fn find_matcher(
        &self,
        member: &MemberDescriptor,
        ignore_duplicates: bool,
    ) -> Result<Option<&MemberMatcher>, TransformError> {
        let matching: SmallVec<[&MemberMatcher; 2]> = self
            .matchers
            .iter()
            .filter(|m| m.is_matching(member))
            .collect();

        match matching.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            [first, ..] if ignore_duplicates => {
                tracing::trace!(
                    member = %member.long_name(),
                    candidates = matching.len(),
                    chosen = first.index(),
                    "duplicate matchers, using first declared"
                );
                Ok(Some(*first))
            }
            _ => Err(TransformError::RuleConflict {
                member: member.long_name(),
                matchers: matching.iter().map(|m| m.repr()).collect(),
            }),
        }
    }

    pub fn should_strip_class(&self, class_name: &str) -> bool {
        matches_any(&self.strip_patterns, class_name)
    }

    pub fn should_skip_class(&self, class_name: &str) -> bool {
        matches_any(&self.skip_patterns, class_name)
    }

    pub fn has_inject_rules(&self) -> bool {
        !self.inject_rules.is_empty()
    }

    pub fn inject_rules(&self) -> &[InjectRule] {
        &self.inject_rules
    }

    pub fn matchers(&self) -> &[MemberMatcher] {
        &self.matchers
    }
}

fn compile_all(
    sources: &[String],
    location: &str,
    cache: &mut PatternCache,
) -> Result<Vec<Pattern>, RuleError> {
    sources
        .iter()
        .enumerate()
        .map(|(i, s)| cache.get_or_compile(s, &format!("{location}[{i}]")))
        .collect()
}
