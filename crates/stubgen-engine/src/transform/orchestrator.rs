//! The transformation orchestrator.

use std::path::PathBuf;

use stubgen_core::errors::{ConfigError, ModelError, TransformError};
use stubgen_core::{
    ClassEditor, ClassLister, ClassModelProvider, ClassWriter, MemberDescriptor, Modifiers,
    TargetVersion, TransformConfig,
};

use super::ordering::input_class_list;
use super::report::TransformReport;
use crate::body::{BodyPlan, BodySynthesizer};
use crate::inject::ClassInjector;
use crate::io::{open_writer, SourceLister};
use crate::model::ModelClassPool;
use crate::rules::{self, RuleSet};

/// Effective run flags, resolved once from a [`TransformConfig`].
#[derive(Debug, Clone)]
struct RunOptions {
    sources: Vec<PathBuf>,
    classpath: Vec<PathBuf>,
    strip_non_public: bool,
    strip_fields: bool,
    strip_final: bool,
    ignore_duplicates: bool,
    target: Option<TargetVersion>,
}

/// Walks every input class through the strip / skip / copy / transform
/// decisions and hands the results to a [`ClassWriter`].
#[derive(Debug)]
pub struct Transformer {
    rules: RuleSet,
    options: RunOptions,
    synthesizer: BodySynthesizer,
}

impl Transformer {
    pub fn new(rules: RuleSet, config: &TransformConfig) -> Result<Self, ConfigError> {
        let options = RunOptions {
            sources: config.sources.clone(),
            classpath: config.classpath.clone(),
            strip_non_public: config.effective_strip_non_public(),
            strip_fields: config.effective_strip_fields(),
            strip_final: config.effective_strip_final(),
            ignore_duplicates: config.effective_ignore_duplicate_matchers(),
            target: config.target_version()?,
        };
        Ok(Self {
            rules,
            options,
            synthesizer: BodySynthesizer::new(config.effective_return_strategy()),
        })
    }

    /// Run the whole pass. Fatal errors abort immediately; whatever was
    /// already written stays written.
    pub fn transform<P, L>(
        &self,
        provider: &mut P,
        lister: &L,
        writer: &mut dyn ClassWriter,
    ) -> Result<TransformReport, TransformError>
    where
        P: ClassModelProvider,
        L: ClassLister + ?Sized,
    {
        for location in self.options.sources.iter().chain(&self.options.classpath) {
            provider
                .append_search_path(location)
                .map_err(|source| TransformError::SearchPath {
                    path: location.display().to_string(),
                    source,
                })?;
        }
        provider
            .append_system_path()
            .map_err(|source| TransformError::SearchPath {
                path: "<system>".to_string(),
                source,
            })?;

        let classes = input_class_list(lister, &self.options.sources)?;
        let mut report = TransformReport {
            classes_listed: classes.len(),
            ..Default::default()
        };
        tracing::info!(count = classes.len(), "classes to process");

        for class_name in &classes {
            self.process_class(provider, class_name, writer, &mut report)?;
        }

        if self.rules.has_inject_rules() {
            let summary = ClassInjector::new(lister).inject_classes(writer, self.rules.inject_rules());
            report.classes_injected = summary.injected;
            report.injection_failures = summary.failed;
        }

        report.support_class_written = write_support_class(provider, writer);

        writer.close()?;
        report.log_summary();
        Ok(report)
    }

    fn process_class<P: ClassModelProvider>(
        &self,
        provider: &mut P,
        class_name: &str,
        writer: &mut dyn ClassWriter,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let class = provider
            .get(class_name)
            .map_err(|source| TransformError::ClassLoad {
                class: class_name.to_string(),
                source,
            })?;

        if class.is_frozen() {
            tracing::debug!(class = class_name, "class already written, dropping duplicate");
            report.classes_dropped_frozen += 1;
            return Ok(());
        }
        if self.rules.should_strip_class(class_name) {
            tracing::debug!(class = class_name, "stripping class");
            report.classes_stripped += 1;
            return Ok(());
        }
        if self.rules.should_skip_class(class_name) {
            tracing::debug!(class = class_name, "skipping class, copied unchanged");
            store_class(class, writer)?;
            report.classes_copied += 1;
            return Ok(());
        }
        if class.is_interface() {
            tracing::debug!(class = class_name, "interface, copied unchanged");
            store_class(class, writer)?;
            report.classes_copied += 1;
            return Ok(());
        }
        if self.options.strip_non_public && !class.modifiers().is_public() {
            tracing::debug!(class = class_name, "ignoring non-public class");
            report.classes_dropped_non_public += 1;
            return Ok(());
        }

        tracing::debug!(class = class_name, "transforming class");
        let model_error = |source| TransformError::Model {
            class: class_name.to_string(),
            source,
        };

        if self.options.strip_final && class.modifiers().is_final() {
            tracing::trace!(class = class_name, "clearing final modifier");
            class
                .set_modifiers(class.modifiers().without(Modifiers::FINAL))
                .map_err(model_error)?;
        }

        self.transform_constructors(class, report).map_err(model_error)?;
        self.transform_methods(class, report)?;
        self.transform_fields(class, report).map_err(model_error)?;

        if let Some(target) = self.options.target {
            class
                .set_major_version(target.major_version())
                .map_err(model_error)?;
        }
        store_class(class, writer)?;
        report.classes_transformed += 1;
        Ok(())
    }

    fn transform_constructors<C: ClassEditor>(
        &self,
        class: &mut C,
        report: &mut TransformReport,
    ) -> Result<(), ModelError> {
        for ctor in class.declared_constructors() {
            if self.options.strip_non_public && !ctor.modifiers.is_public() {
                tracing::trace!(member = %ctor.long_name(), "removing constructor");
                class.remove_member(&ctor.id)?;
                report.constructors_removed += 1;
                continue;
            }

            if ctor.modifiers.is_private() {
                class.set_member_modifiers(&ctor.id, ctor.modifiers.without(Modifiers::PRIVATE))?;
            }
            match class.set_body(&ctor.id, None) {
                Ok(()) => {
                    tracing::trace!(member = %ctor.long_name(), "cleared constructor body");
                    report.constructors_cleared += 1;
                }
                Err(error) => {
                    tracing::warn!(member = %ctor.long_name(), %error, "cannot clear constructor body, left unmodified");
                    if ctor.modifiers.is_private() {
                        if let Err(restore) = class.set_member_modifiers(&ctor.id, ctor.modifiers) {
                            tracing::warn!(member = %ctor.long_name(), error = %restore, "cannot restore constructor modifiers");
                        }
                    }
                    report.constructors_failed += 1;
                }
            }
        }
        Ok(())
    }

    fn transform_methods<C: ClassEditor>(
        &self,
        class: &mut C,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let model_error = |class: &C, source| TransformError::Model {
            class: class.name().to_string(),
            source,
        };

        for method in class.declared_methods() {
            let mut modifiers = method.modifiers;
            if self.options.strip_final && modifiers.is_final() && !modifiers.is_native() {
                modifiers = modifiers.without(Modifiers::FINAL);
                tracing::trace!(member = %method.long_name(), "clearing final modifier");
                class
                    .set_member_modifiers(&method.id, modifiers)
                    .map_err(|e| model_error(class, e))?;
            }

            if self.options.strip_non_public && !modifiers.is_public() {
                tracing::trace!(member = %method.long_name(), "removing method");
                class.remove_member(&method.id).map_err(|e| model_error(class, e))?;
                report.methods_removed += 1;
                continue;
            }

            if modifiers.is_abstract() || modifiers.is_native() {
                report.methods_untouched += 1;
                continue;
            }

            self.rewrite_method(class, &method, report)?;
        }
        Ok(())
    }

    fn rewrite_method<C: ClassEditor>(
        &self,
        class: &mut C,
        method: &MemberDescriptor,
        report: &mut TransformReport,
    ) -> Result<(), TransformError> {
        let matcher = self.rules.find_matcher(method, self.options.ignore_duplicates)?;
        match self.synthesizer.resolve(method, matcher) {
            BodyPlan::Keep => {
                tracing::trace!(member = %method.long_name(), "keeping existing body");
                report.methods_kept += 1;
            }
            BodyPlan::Replace(body) => {
                tracing::trace!(
                    member = %method.long_name(),
                    matched = matcher.is_some(),
                    default_body = body.is_none(),
                    "rewriting method"
                );
                class
                    .set_body(&method.id, body.as_deref())
                    .map_err(|source| TransformError::BodyApply {
                        member: method.long_name(),
                        body: body.clone().unwrap_or_else(|| "<default body>".to_string()),
                        source,
                    })?;
                report.methods_rewritten += 1;
            }
        }
        Ok(())
    }

    fn transform_fields<C: ClassEditor>(
        &self,
        class: &mut C,
        report: &mut TransformReport,
    ) -> Result<(), ModelError> {
        for field in class.declared_fields() {
            let remove = self.options.strip_fields
                || (self.options.strip_non_public && !field.modifiers.is_public());
            if remove {
                tracing::trace!(member = %field.long_name(), "removing field");
                class.remove_member(&field.id)?;
                report.fields_removed += 1;
            }
        }
        Ok(())
    }
}

fn store_class<C: ClassEditor>(class: &mut C, writer: &mut dyn ClassWriter) -> Result<(), TransformError> {
    let data = class.to_bytes().map_err(|source| TransformError::Serialize {
        class: class.name().to_string(),
        source,
    })?;
    writer.add_class(class.name(), &data)?;
    Ok(())
}

/// Best effort: a failure is a warning and the run still succeeds.
fn write_support_class<P: ClassModelProvider>(provider: &mut P, writer: &mut dyn ClassWriter) -> bool {
    let serialized = provider.runtime_support_class().and_then(|class| {
        let data = class.to_bytes()?;
        Ok((class.name().to_string(), data))
    });
    let result = serialized
        .map_err(|e| e.to_string())
        .and_then(|(name, data)| writer.add_class(&name, &data).map_err(|e| e.to_string()));
    match result {
        Ok(()) => {
            tracing::debug!("wrote runtime support class");
            true
        }
        Err(error) => {
            tracing::warn!(%error, "failed to write runtime support class, results may be unusable");
            false
        }
    }
}

/// Load rules, open the output and run a full transformation with the
/// shipped collaborators.
pub fn run(config: &TransformConfig) -> Result<TransformReport, TransformError> {
    config.validate()?;
    let rules = rules::load_or_default(config.rules.as_deref())?;
    let transformer = Transformer::new(rules, config)?;

    let output = config.output.as_deref().ok_or(ConfigError::NoOutput)?;
    let mut writer = open_writer(output)?;
    let mut pool = ModelClassPool::new();

    transformer.transform(&mut pool, &SourceLister, writer.as_mut())
}
