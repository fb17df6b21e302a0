//! Archive lister and writer.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use stubgen_core::errors::{OutputError, SourceError};
use stubgen_core::{ClassLister, ClassWriter};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use super::{class_entry_name, class_name_from_entry};

pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
pub const MANIFEST: &str = "Manifest-Version: 1.0\nCreated-By: stubgen\n";

pub(crate) fn open_archive(location: &Path) -> Result<ZipArchive<File>, SourceError> {
    let file = File::open(location).map_err(|_| SourceError::NotFound(location.display().to_string()))?;
    ZipArchive::new(file).map_err(|e| SourceError::Read {
        path: location.display().to_string(),
        message: e.to_string(),
    })
}

/// Lists `.class` entries of an archive in archive order.
#[derive(Debug, Default, Clone, Copy)]
pub struct JarLister;

impl ClassLister for JarLister {
    fn list(&self, location: &Path) -> Result<Vec<String>, SourceError> {
        let mut archive = open_archive(location)?;
        let mut classes = Vec::new();
        for i in 0..archive.len() {
            let entry = archive.by_index_raw(i).map_err(|e| SourceError::Read {
                path: location.display().to_string(),
                message: e.to_string(),
            })?;
            if entry.is_dir() {
                continue;
            }
            if let Some(name) = class_name_from_entry(entry.name()) {
                classes.push(name);
            }
        }
        tracing::trace!(location = %location.display(), count = classes.len(), "listed archive");
        Ok(classes)
    }

    fn read_class(&self, location: &Path, class_name: &str) -> Result<Vec<u8>, SourceError> {
        read_entry(&mut open_archive(location)?, location, class_name)
    }

    fn read_classes(&self, location: &Path, class_names: &[String]) -> Vec<Result<Vec<u8>, SourceError>> {
        match open_archive(location) {
            Ok(mut archive) => class_names
                .iter()
                .map(|name| read_entry(&mut archive, location, name))
                .collect(),
            Err(e) => {
                let message = e.to_string();
                class_names
                    .iter()
                    .map(|_| {
                        Err(SourceError::Read {
                            path: location.display().to_string(),
                            message: message.clone(),
                        })
                    })
                    .collect()
            }
        }
    }
}

/// Read one class entry from an already opened archive.
pub(crate) fn read_entry(
    archive: &mut ZipArchive<File>,
    location: &Path,
    class_name: &str,
) -> Result<Vec<u8>, SourceError> {
    let mut entry = archive
        .by_name(&class_entry_name(class_name))
        .map_err(|_| SourceError::MissingClass {
            path: location.display().to_string(),
            class: class_name.to_string(),
        })?;
    let mut data = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
    entry.read_to_end(&mut data).map_err(|e| SourceError::Read {
        path: location.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(data)
}

/// Writes classes into a deflated archive with a minimal manifest.
/// Entry timestamps are fixed so identical inputs give identical archives.
pub struct JarWriter {
    path: PathBuf,
    zip: Option<ZipWriter<File>>,
}

impl JarWriter {
    /// Create (or truncate) the archive at `path` and write the manifest entry.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let write_error = |e: String| OutputError::Write {
            path: path.display().to_string(),
            message: e,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        let file = File::create(path).map_err(|e| write_error(e.to_string()))?;
        let mut writer = Self {
            path: path.to_path_buf(),
            zip: Some(ZipWriter::new(file)),
        };
        writer.write_entry(MANIFEST_PATH, MANIFEST.as_bytes())?;
        Ok(writer)
    }

    fn entry_options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644)
    }

    fn write_entry(&mut self, name: &str, data: &[u8]) -> Result<(), OutputError> {
        let path = self.path.display().to_string();
        let zip = self.zip.as_mut().ok_or_else(|| OutputError::Closed(path.clone()))?;
        let write_error = |message: String| OutputError::Write {
            path: format!("{path}!{name}"),
            message,
        };
        zip.start_file(name, Self::entry_options())
            .map_err(|e| write_error(e.to_string()))?;
        zip.write_all(data).map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }
}

impl ClassWriter for JarWriter {
    fn add_class(&mut self, class_name: &str, data: &[u8]) -> Result<(), OutputError> {
        self.write_entry(&class_entry_name(class_name), data)?;
        tracing::trace!(class = class_name, archive = %self.path.display(), "added archive entry");
        Ok(())
    }

    fn close(&mut self) -> Result<(), OutputError> {
        let Some(zip) = self.zip.take() else {
            return Ok(());
        };
        zip.finish().map_err(|e| OutputError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
