//! Run counters returned by [`Transformer::transform`](super::Transformer::transform).

/// What a transformation run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub classes_listed: usize,
    pub classes_transformed: usize,
    /// Skip-rule matches and interfaces, written unchanged.
    pub classes_copied: usize,
    pub classes_stripped: usize,
    pub classes_dropped_frozen: usize,
    pub classes_dropped_non_public: usize,
    pub methods_rewritten: usize,
    pub methods_kept: usize,
    pub methods_removed: usize,
    /// Abstract and native methods.
    pub methods_untouched: usize,
    pub constructors_cleared: usize,
    pub constructors_removed: usize,
    pub constructors_failed: usize,
    pub fields_removed: usize,
    pub classes_injected: usize,
    pub injection_failures: usize,
    pub support_class_written: bool,
}

impl TransformReport {
    /// Classes written to the output by the main pass.
    pub fn classes_written(&self) -> usize {
        self.classes_transformed + self.classes_copied
    }

    pub(crate) fn log_summary(&self) {
        tracing::info!(
            listed = self.classes_listed,
            transformed = self.classes_transformed,
            copied = self.classes_copied,
            stripped = self.classes_stripped,
            dropped = self.classes_dropped_frozen + self.classes_dropped_non_public,
            methods_rewritten = self.methods_rewritten,
            methods_removed = self.methods_removed,
            fields_removed = self.fields_removed,
            injected = self.classes_injected,
            "transformation complete"
        );
    }
}
