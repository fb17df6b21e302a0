//! ClassWriter trait: persists output classes.

use crate::errors::OutputError;

/// Destination for transformed classes (folder tree or archive).
pub trait ClassWriter {
    fn add_class(&mut self, class_name: &str, data: &[u8]) -> Result<(), OutputError>;

    /// Flush and release the destination. Further `add_class` calls fail.
    fn close(&mut self) -> Result<(), OutputError>;
}
