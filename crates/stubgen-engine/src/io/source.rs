//! Source location dispatch between folder and archive listers.

use std::fs::File;
use std::path::{Path, PathBuf};

use stubgen_core::errors::SourceError;
use stubgen_core::ClassLister;
use zip::ZipArchive;

use super::jar::read_entry;
use super::{FsLister, JarLister, SourceKind};

/// Lists and reads classes from either a folder or an archive, decided per location.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceLister;

impl SourceLister {
    fn for_location(location: &Path) -> Result<&'static dyn ClassLister, SourceError> {
        if !location.exists() {
            return Err(SourceError::NotFound(location.display().to_string()));
        }
        Ok(match SourceKind::detect(location) {
            SourceKind::Archive => &JarLister,
            SourceKind::Folder => &FsLister,
        })
    }
}

impl ClassLister for SourceLister {
    fn list(&self, location: &Path) -> Result<Vec<String>, SourceError> {
        Self::for_location(location)?.list(location)
    }

    fn read_class(&self, location: &Path, class_name: &str) -> Result<Vec<u8>, SourceError> {
        Self::for_location(location)?.read_class(location, class_name)
    }

    fn read_classes(&self, location: &Path, class_names: &[String]) -> Vec<Result<Vec<u8>, SourceError>> {
        match Self::for_location(location) {
            Ok(lister) => lister.read_classes(location, class_names),
            Err(e) => {
                let message = e.to_string();
                class_names
                    .iter()
                    .map(|_| Err(SourceError::NotFound(message.clone())))
                    .collect()
            }
        }
    }
}

/// A search path entry opened once. Archives keep their parsed central
/// directory, so each class lookup is a single indexed read.
#[derive(Debug)]
pub enum ClassSource {
    Folder(PathBuf),
    Archive {
        path: PathBuf,
        archive: ZipArchive<File>,
    },
}

impl ClassSource {
    pub fn open(location: &Path) -> Result<Self, SourceError> {
        if !location.exists() {
            return Err(SourceError::NotFound(location.display().to_string()));
        }
        if location.is_file() {
            let archive = File::open(location)
                .ok()
                .and_then(|file| ZipArchive::new(file).ok());
            if let Some(archive) = archive {
                return Ok(Self::Archive {
                    path: location.to_path_buf(),
                    archive,
                });
            }
        }
        Ok(Self::Folder(location.to_path_buf()))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Folder(path) | Self::Archive { path, .. } => path,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Folder(_) => SourceKind::Folder,
            Self::Archive { .. } => SourceKind::Archive,
        }
    }

    pub fn read_class(&mut self, class_name: &str) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::Folder(root) => FsLister.read_class(root, class_name),
            Self::Archive { path, archive } => read_entry(archive, path, class_name),
        }
    }
}
