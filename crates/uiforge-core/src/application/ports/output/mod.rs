//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `uiforge_adapters::filesystem::LocalFilesystem` (production)
/// - `uiforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for the interactive session.
///
/// Every prompt is one line out and one line back. Implemented by:
/// - `uiforge_adapters::terminal::LineTerminal` (stdin/stdout)
/// - `uiforge_adapters::terminal::ScriptedTerminal` (testing)
pub trait Terminal {
    /// Print an informational line.
    fn write_line(&mut self, line: &str) -> ForgeResult<()>;

    /// Print a section heading. Plain terminals print it as a line.
    fn write_heading(&mut self, line: &str) -> ForgeResult<()> {
        self.write_line(line)
    }

    /// Print a recoverable input error before re-prompting.
    fn write_error(&mut self, line: &str) -> ForgeResult<()>;

    /// Show `prompt` and block for one line of input.
    ///
    /// Returns `None` once input has ended. The returned line has its
    /// trailing newline removed.
    fn read_line(&mut self, prompt: &str) -> ForgeResult<Option<String>>;
}

/// Port for installing a generated project's dependencies.
#[cfg_attr(test, mockall::automock)]
pub trait DependencyInstaller: Send + Sync {
    /// The command line shown to the user, e.g. `npm install`.
    fn describe(&self) -> String;

    /// Run the install inside `project_root`.
    fn install(&self, project_root: &Path) -> ForgeResult<()>;
}
