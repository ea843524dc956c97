//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use uiforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same contents, so a test can keep a handle while the
/// emitter owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
    fail_on: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail.
    pub fn fail_on(self, path: impl Into<PathBuf>) -> Self {
        self.write().fail_on = Some(path.into());
        self
    }

    // A poisoned lock only means another test thread panicked; the data is
    // still usable.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    /// Number of mutating calls made so far.
    pub fn write_count(&self) -> usize {
        self.read().writes
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write();
        inner.writes += 1;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.write();

        if inner.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Injected write failure".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.writes += 1;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write();
        inner.writes += 1;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("demo/index.html"), "<html>").is_err());

        fs.create_dir_all(Path::new("demo")).unwrap();
        fs.write_file(Path::new("demo/index.html"), "<html>").unwrap();
        assert_eq!(fs.read_file(Path::new("demo/index.html")).unwrap(), "<html>");
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("a/b")).unwrap();

        assert!(handle.exists(Path::new("a")));
        assert!(handle.exists(Path::new("a/b")));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn remove_drops_subtree() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("demo/css")).unwrap();
        fs.write_file(Path::new("demo/css/main.css"), "").unwrap();
        fs.create_dir_all(Path::new("other")).unwrap();

        fs.remove_dir_all(Path::new("demo")).unwrap();

        assert!(!fs.exists(Path::new("demo/css")));
        assert!(fs.list_files().is_empty());
        assert!(fs.exists(Path::new("other")));
    }

    #[test]
    fn injected_failure() {
        let fs = MemoryFilesystem::new().fail_on("x.txt");
        assert!(fs.write_file(Path::new("x.txt"), "").is_err());
        assert_eq!(fs.write_count(), 0);
    }
}
