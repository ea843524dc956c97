use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Resolved project content ready for materialization.
///
/// This is the output of the selection resolver. It holds no business
/// logic, only data: the directories to create and the files to write,
/// both relative to the destination root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBundle {
    directories: Vec<PathBuf>,
    files: Vec<BundleFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub path: PathBuf,
    pub content: String,
}

impl BundleFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

impl ContentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) -> Result<(), DomainError> {
        let path = path.into();
        check_relative(&path)?;
        if self.directories.contains(&path) {
            return Err(duplicate(&path));
        }
        self.directories.push(path);
        Ok(())
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Result<(), DomainError> {
        let path = path.into();
        check_relative(&path)?;
        if self.contains(&path) {
            return Err(duplicate(&path));
        }
        self.files.push(BundleFile {
            path,
            content: content.into(),
        });
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyBundle);
        }
        Ok(())
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.file(path).is_some()
    }

    /// Every path in the bundle, directories first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.directories
            .iter()
            .map(PathBuf::as_path)
            .chain(self.files.iter().map(|f| f.path.as_path()))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

fn check_relative(path: &Path) -> Result<(), DomainError> {
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if path.is_absolute() || escapes || path.as_os_str().is_empty() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

fn duplicate(path: &Path) -> DomainError {
    DomainError::DuplicatePath {
        path: path.display().to_string(),
    }
}
