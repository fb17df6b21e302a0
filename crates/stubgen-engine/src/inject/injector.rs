//! Copies whole classes from rule-specified locations into the output.

use stubgen_core::{ClassLister, ClassWriter};

use crate::rules::InjectRule;

/// Outcome of an injection pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InjectionSummary {
    pub injected: usize,
    pub failed: usize,
}

/// Byte-for-byte class copier. Failures never abort the run: each one is
/// logged and counted.
pub struct ClassInjector<'a, L: ClassLister + ?Sized> {
    lister: &'a L,
}

impl<'a, L: ClassLister + ?Sized> ClassInjector<'a, L> {
    pub fn new(lister: &'a L) -> Self {
        Self { lister }
    }

    pub fn inject_classes(&self, writer: &mut dyn ClassWriter, rules: &[InjectRule]) -> InjectionSummary {
        let mut summary = InjectionSummary::default();
        for rule in rules {
            self.process_rule(rule, writer, &mut summary);
        }
        summary
    }

    fn process_rule(&self, rule: &InjectRule, writer: &mut dyn ClassWriter, summary: &mut InjectionSummary) {
        let source = rule.source();
        let classes = match self.lister.list(source) {
            Ok(classes) => classes,
            Err(e) => {
                tracing::warn!(source = %source.display(), error = %e, "cannot list injection source, rule skipped");
                summary.failed += 1;
                return;
            }
        };

        let selected: Vec<String> = classes.into_iter().filter(|c| rule.matches(c)).collect();
        let contents = self.lister.read_classes(source, &selected);
        for (class_name, data) in selected.iter().zip(contents) {
            let copied = data
                .map_err(|e| e.to_string())
                .and_then(|data| writer.add_class(class_name, &data).map_err(|e| e.to_string()));
            match copied {
                Ok(()) => {
                    tracing::trace!(class = %class_name, source = %source.display(), "injected class");
                    summary.injected += 1;
                }
                Err(error) => {
                    tracing::warn!(class = %class_name, error = %error, "failed to inject class");
                    summary.failed += 1;
                }
            }
        }
    }
}
