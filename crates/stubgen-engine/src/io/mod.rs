//! Class listing and writing for folder trees and archives.

pub mod fs;
pub mod jar;
pub mod source;

use std::path::{Path, PathBuf};

use stubgen_core::errors::OutputError;
use stubgen_core::ClassWriter;

pub use fs::{FsLister, FsWriter};
pub use jar::{JarLister, JarWriter};
pub use source::{ClassSource, SourceLister};

pub const CLASS_EXT: &str = ".class";

/// Layout of a class source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Folder,
    Archive,
}

impl SourceKind {
    /// Archive if `path` opens as a zip archive, folder otherwise.
    pub fn detect(path: &Path) -> Self {
        let is_archive = path.is_file()
            && std::fs::File::open(path)
                .ok()
                .is_some_and(|f| zip::ZipArchive::new(f).is_ok());
        if is_archive {
            Self::Archive
        } else {
            Self::Folder
        }
    }

    /// Output locations are picked by extension: `.jar` and `.zip` are archives.
    pub fn for_output(path: &Path) -> Self {
        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jar") || e.eq_ignore_ascii_case("zip"));
        if is_archive {
            Self::Archive
        } else {
            Self::Folder
        }
    }
}

/// `com.acme.Foo$Bar` -> `com/acme/Foo$Bar.class`
pub fn class_entry_name(class_name: &str) -> String {
    format!("{}{CLASS_EXT}", class_name.replace('.', "/"))
}

/// `com/acme/Foo$Bar.class` -> `com.acme.Foo$Bar`
pub fn class_name_from_entry(entry: &str) -> Option<String> {
    entry
        .strip_suffix(CLASS_EXT)
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.replace(['/', '\\'], "."))
}

/// Relative file path of a class under a folder root.
pub fn class_file_path(root: &Path, class_name: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    let mut segments = class_name.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_some() {
            path.push(segment);
        } else {
            path.push(format!("{segment}{CLASS_EXT}"));
        }
    }
    path
}

/// Open the writer matching the output location's kind.
pub fn open_writer(path: &Path) -> Result<Box<dyn ClassWriter>, OutputError> {
    match SourceKind::for_output(path) {
        SourceKind::Archive => Ok(Box::new(JarWriter::create(path)?)),
        SourceKind::Folder => Ok(Box::new(FsWriter::new(path))),
    }
}
