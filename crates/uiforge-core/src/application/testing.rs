//! In-crate test doubles for the ports.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::ApplicationError;
use crate::application::ports::{Filesystem, Terminal};
use crate::error::ForgeResult;

/// Terminal fed from a fixed list of answers.
#[derive(Debug, Default)]
pub(crate) struct FakeTerminal {
    inputs: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
    pub(crate) lines: Vec<String>,
    pub(crate) errors: Vec<String>,
}

impl FakeTerminal {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Terminal for FakeTerminal {
    fn write_line(&mut self, line: &str) -> ForgeResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> ForgeResult<()> {
        self.errors.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> ForgeResult<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }
}

#[derive(Debug, Default)]
struct FsState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    mutations: usize,
}

/// Filesystem that records every mutation.
#[derive(Debug, Default)]
pub(crate) struct RecordingFs {
    state: Mutex<FsState>,
    fail_on: Option<PathBuf>,
}

impl RecordingFs {
    pub(crate) fn with_dir(path: impl Into<PathBuf>) -> Self {
        let fs = Self::default();
        fs.state.lock().unwrap().dirs.insert(path.into());
        fs
    }

    pub(crate) fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_on: Some(path.into()),
            ..Self::default()
        }
    }

    pub(crate) fn mutations(&self) -> usize {
        self.state.lock().unwrap().mutations
    }

    pub(crate) fn file(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub(crate) fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut state = self.state.lock().unwrap();
        state.mutations += 1;
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        let mut state = self.state.lock().unwrap();
        state.mutations += 1;
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.contains(path) || state.files.contains_key(path)
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut state = self.state.lock().unwrap();
        state.mutations += 1;
        state.dirs.retain(|d| !d.starts_with(path));
        state.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }
}
