//! Report Service - saves rendered design reports.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{application::ports::Filesystem, error::ForgeResult};

/// `<prefix>-<millis>.txt`.
///
/// Two saves within the same millisecond produce the same name and the
/// second overwrites the first.
pub fn report_file_name(prefix: &str, unix_millis: u128) -> String {
    format!("{prefix}-{unix_millis}.txt")
}

pub struct ReportService {
    filesystem: Box<dyn Filesystem>,
}

impl ReportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `content` to `directory/file_name`, creating the directory if
    /// needed. Returns the full path written.
    #[instrument(skip(self, content), fields(directory = %directory.display()))]
    pub fn save(&self, directory: &Path, file_name: &str, content: &str) -> ForgeResult<PathBuf> {
        if !self.filesystem.exists(directory) {
            self.filesystem.create_dir_all(directory)?;
        }

        let path = directory.join(file_name);
        self.filesystem.write_file(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "Report saved");
        Ok(path)
    }
}
