//! Folder tree lister and writer.

use std::path::{Path, PathBuf};

use stubgen_core::errors::{OutputError, SourceError};
use stubgen_core::{ClassLister, ClassWriter};

use super::{class_file_path, class_name_from_entry, CLASS_EXT};

/// Lists `*.class` files below a folder, sorted by class name.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl ClassLister for FsLister {
    fn list(&self, location: &Path) -> Result<Vec<String>, SourceError> {
        if !location.is_dir() {
            return Err(SourceError::NotFound(location.display().to_string()));
        }

        let mut builder = ignore::WalkBuilder::new(location);
        // Class trees are build output: ignore files and hidden filters would hide them.
        builder.standard_filters(false).follow_links(false);

        let mut classes = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| SourceError::Read {
                path: location.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            if !path.to_string_lossy().ends_with(CLASS_EXT) {
                continue;
            }
            let Ok(relative) = path.strip_prefix(location) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if let Some(name) = class_name_from_entry(&relative) {
                classes.push(name);
            }
        }

        classes.sort();
        tracing::trace!(location = %location.display(), count = classes.len(), "listed folder");
        Ok(classes)
    }

    fn read_class(&self, location: &Path, class_name: &str) -> Result<Vec<u8>, SourceError> {
        let path = class_file_path(location, class_name);
        if !path.is_file() {
            return Err(SourceError::MissingClass {
                path: location.display().to_string(),
                class: class_name.to_string(),
            });
        }
        std::fs::read(&path).map_err(|e| SourceError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Writes each class to `<root>/<package dirs>/<Name>.class`.
#[derive(Debug)]
pub struct FsWriter {
    root: PathBuf,
    closed: bool,
}

impl FsWriter {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            closed: false,
        }
    }
}

impl ClassWriter for FsWriter {
    fn add_class(&mut self, class_name: &str, data: &[u8]) -> Result<(), OutputError> {
        if self.closed {
            return Err(OutputError::Closed(self.root.display().to_string()));
        }
        let target = class_file_path(&self.root, class_name);
        let write_error = |e: std::io::Error| OutputError::Write {
            path: target.display().to_string(),
            message: e.to_string(),
        };
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&target, data).map_err(write_error)?;
        tracing::trace!(class = class_name, path = %target.display(), "wrote class file");
        Ok(())
    }

    fn close(&mut self) -> Result<(), OutputError> {
        self.closed = true;
        Ok(())
    }
}
