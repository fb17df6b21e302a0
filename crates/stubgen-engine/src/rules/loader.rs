//! Rule document loading: format detection, parsing and compilation.

use std::path::Path;

use stubgen_core::errors::RuleError;

use super::rule_set::RuleSet;
use super::types::{RuleDocument, XmlRules};

const DEFAULT_RULES: &str = include_str!("default_rules.toml");

/// Supported rule document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Toml,
    Xml,
    Json,
    Yaml,
}

impl RuleFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "xml" => Some(Self::Xml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Parse a rule document without compiling it. Declaration order of every
/// list is preserved.
pub fn parse_document(content: &str, format: RuleFormat) -> Result<RuleDocument, RuleError> {
    let parse_error = |message: String| RuleError::Parse {
        format: format.name().to_string(),
        message,
    };
    match format {
        RuleFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        RuleFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        RuleFormat::Yaml => {
            // An empty YAML document deserializes as unit, not as an empty map.
            if content.trim().is_empty() {
                return Ok(RuleDocument::default());
            }
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
        RuleFormat::Xml => quick_xml::de::from_str::<XmlRules>(content)
            .map(RuleDocument::from)
            .map_err(|e| parse_error(e.to_string())),
    }
}

/// Parse and compile a rule document held in memory.
pub fn load_from_str(content: &str, format: RuleFormat) -> Result<RuleSet, RuleError> {
    let doc = parse_document(content, format)?;
    RuleSet::from_document(&doc)
}

/// Parse and compile a rule document from disk, picking the format from its extension.
pub fn load_from_file(path: &Path) -> Result<RuleSet, RuleError> {
    let format = RuleFormat::from_path(path).ok_or_else(|| RuleError::UnsupportedFormat {
        path: path.display().to_string(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| RuleError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let rules = load_from_str(&content, format)?;
    tracing::info!(
        path = %path.display(),
        format = format.name(),
        matchers = rules.matchers().len(),
        "loaded rule document"
    );
    Ok(rules)
}

/// The built-in rule set, embedded at compile time.
pub fn default_rules() -> Result<RuleSet, RuleError> {
    load_from_str(DEFAULT_RULES, RuleFormat::Toml)
}

/// Load `path` when given, otherwise fall back to the built-in rules.
pub fn load_or_default(path: Option<&Path>) -> Result<RuleSet, RuleError> {
    match path {
        Some(p) => load_from_file(p),
        None => {
            tracing::debug!("no rule document configured, using built-in rules");
            default_rules()
        }
    }
}
