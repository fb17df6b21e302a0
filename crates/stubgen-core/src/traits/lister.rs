//! ClassLister trait: enumerates and reads classes from a source location.

use std::path::Path;

use crate::errors::SourceError;

/// Enumerates the classes available at a folder or archive.
pub trait ClassLister {
    /// Qualified names (`com.acme.Foo`, `com.acme.Foo$Bar`) of every class at `location`,
    /// in a deterministic enumeration order.
    fn list(&self, location: &Path) -> Result<Vec<String>, SourceError>;

    /// Raw bytes of one class at `location`, untouched.
    fn read_class(&self, location: &Path, class_name: &str) -> Result<Vec<u8>, SourceError>;

    /// Raw bytes of several classes at `location`, one result per name.
    /// Archive-backed listers override this to open the location once.
    fn read_classes(&self, location: &Path, class_names: &[String]) -> Vec<Result<Vec<u8>, SourceError>> {
        class_names
            .iter()
            .map(|name| self.read_class(location, name))
            .collect()
    }
}
