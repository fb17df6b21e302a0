//! Compiled full-match patterns and the cache that shares them.

use std::fmt;

use regex::Regex;
use rustc_hash::FxHashMap;
use stubgen_core::errors::RuleError;

/// A regex that must match the whole candidate string.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` anchored at both ends. `location` names where the
    /// pattern came from for error reporting.
    pub fn compile(source: &str, location: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| RuleError::InvalidPattern {
            pattern: source.to_string(),
            location: location.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The pattern as written in the rule document.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// Compiles each distinct pattern string once per rule set load.
/// `Regex` clones share the compiled program.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: FxHashMap<String, Pattern>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&mut self, source: &str, location: &str) -> Result<Pattern, RuleError> {
        if let Some(pattern) = self.compiled.get(source) {
            return Ok(pattern.clone());
        }
        let pattern = Pattern::compile(source, location)?;
        self.compiled.insert(source.to_string(), pattern.clone());
        Ok(pattern)
    }

    /// Number of distinct compiled patterns.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// True if `candidate` fully matches any of `patterns`.
pub fn matches_any(patterns: &[Pattern], candidate: &str) -> bool {
    patterns.iter().any(|p| p.matches(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_full_match() {
        let p = Pattern::compile("get.*", "test").unwrap();
        assert!(p.matches("getName"));
        assert!(!p.matches("forget"));
        assert!(!p.matches("xgetName"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let p = Pattern::compile("foo|bar", "test").unwrap();
        assert!(p.matches("foo"));
        assert!(p.matches("bar"));
        assert!(!p.matches("foobar"));
        assert!(!p.matches("barx"));
    }

    #[test]
    fn invalid_pattern_names_its_location() {
        let err = Pattern::compile("(unclosed", "methods[2].method_name").unwrap_err();
        match err {
            RuleError::InvalidPattern {
                pattern, location, ..
            } => {
                assert_eq!(pattern, "(unclosed");
                assert_eq!(location, "methods[2].method_name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn cache_compiles_identical_sources_once() {
        let mut cache = PatternCache::new();
        cache.get_or_compile("a.*", "x").unwrap();
        cache.get_or_compile("a.*", "y").unwrap();
        cache.get_or_compile("b", "z").unwrap();
        assert_eq!(cache.len(), 2);
    }
}
