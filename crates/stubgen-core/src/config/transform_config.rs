//! Transformation run options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// What to return from unmatched methods whose body is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnStrategy {
    /// Leave it to the editor's trivial default body (null / zero).
    #[default]
    Nulls,
    /// Construct wrapper or default instances for reference return types.
    Instance,
}

/// Requested class-format target, given as a platform release number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetVersion {
    release: u8,
}

impl TargetVersion {
    pub const MAX_RELEASE: u8 = 21;

    pub fn from_release(release: u8) -> Result<Self, ConfigError> {
        if (1..=Self::MAX_RELEASE).contains(&release) {
            Ok(Self { release })
        } else {
            Err(ConfigError::UnsupportedTarget(release))
        }
    }

    /// Class-format major version (release 1 is 45, release 8 is 52).
    pub fn major_version(self) -> u16 {
        44 + u16::from(self.release)
    }
}

/// Options for one transformation run. Every flag is optional so that config
/// files and command-line flags can be layered with [`TransformConfig::merge`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransformConfig {
    /// Folders or archives holding the classes to stub.
    pub sources: Vec<PathBuf>,
    /// Output folder, or archive when the path ends in `.jar` / `.zip`.
    pub output: Option<PathBuf>,
    /// Rule document. The built-in defaults are used when absent.
    pub rules: Option<PathBuf>,
    /// Extra search path entries used to resolve referenced classes.
    pub classpath: Vec<PathBuf>,
    /// Drop non-public classes and members. Default: false.
    pub strip_non_public: Option<bool>,
    /// Remove every declared field. Default: false.
    pub strip_fields: Option<bool>,
    /// Clear `final` on classes and methods. Default: false.
    pub strip_final: Option<bool>,
    /// Pick the first declared matcher instead of failing on conflicts. Default: false.
    pub ignore_duplicate_matchers: Option<bool>,
    /// Default: nulls.
    pub return_strategy: Option<ReturnStrategy>,
    /// Target platform release (1..=21).
    pub target: Option<u8>,
    /// 0 = default, 1 = verbose, 2 = noisy.
    pub verbosity: Option<u8>,
}

impl TransformConfig {
    pub fn effective_strip_non_public(&self) -> bool {
        self.strip_non_public.unwrap_or(false)
    }

    pub fn effective_strip_fields(&self) -> bool {
        self.strip_fields.unwrap_or(false)
    }

    pub fn effective_strip_final(&self) -> bool {
        self.strip_final.unwrap_or(false)
    }

    pub fn effective_ignore_duplicate_matchers(&self) -> bool {
        self.ignore_duplicate_matchers.unwrap_or(false)
    }

    pub fn effective_return_strategy(&self) -> ReturnStrategy {
        self.return_strategy.unwrap_or_default()
    }

    pub fn effective_verbosity(&self) -> u8 {
        self.verbosity.unwrap_or(0)
    }

    pub fn target_version(&self) -> Result<Option<TargetVersion>, ConfigError> {
        self.target.map(TargetVersion::from_release).transpose()
    }

    /// Layer `overrides` on top of `self`: set options win, non-empty lists replace.
    #[must_use]
    pub fn merge(self, overrides: TransformConfig) -> TransformConfig {
        TransformConfig {
            sources: if overrides.sources.is_empty() {
                self.sources
            } else {
                overrides.sources
            },
            output: overrides.output.or(self.output),
            rules: overrides.rules.or(self.rules),
            classpath: if overrides.classpath.is_empty() {
                self.classpath
            } else {
                overrides.classpath
            },
            strip_non_public: overrides.strip_non_public.or(self.strip_non_public),
            strip_fields: overrides.strip_fields.or(self.strip_fields),
            strip_final: overrides.strip_final.or(self.strip_final),
            ignore_duplicate_matchers: overrides
                .ignore_duplicate_matchers
                .or(self.ignore_duplicate_matchers),
            return_strategy: overrides.return_strategy.or(self.return_strategy),
            target: overrides.target.or(self.target),
            verbosity: overrides.verbosity.or(self.verbosity),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }
        if self.output.is_none() {
            return Err(ConfigError::NoOutput);
        }
        if self.effective_verbosity() > 2 {
            return Err(ConfigError::UnsupportedVerbosity(self.effective_verbosity()));
        }
        self.target_version()?;
        Ok(())
    }
}
