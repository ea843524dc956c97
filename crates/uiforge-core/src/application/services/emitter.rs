//! Project Emitter - materialises a content bundle on the filesystem.
//!
//! The workflow is split so the CLI can wrap each stage in its own output:
//! 1. Confirm overwriting an existing destination
//! 2. Create directories, then write files
//! 3. Optionally install dependencies

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{DependencyInstaller, Filesystem},
        services::sequencer::PromptSequencer,
    },
    domain::ContentBundle,
    error::ForgeResult,
};

/// Manifest whose presence triggers the install step.
const MANIFEST: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// No installer configured, or nothing to install.
    Skipped,
    Succeeded,
    /// The install failed; the project itself was still written.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub root: PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
    pub install: InstallStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    Written(EmitReport),
    /// The user kept the existing destination. Nothing was touched.
    Cancelled,
}

pub struct ProjectEmitter {
    filesystem: Box<dyn Filesystem>,
    installer: Option<Box<dyn DependencyInstaller>>,
}

impl ProjectEmitter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            installer: None,
        }
    }

    pub fn with_installer(mut self, installer: Box<dyn DependencyInstaller>) -> Self {
        self.installer = Some(installer);
        self
    }

    /// Make sure `root` is free to write into.
    ///
    /// Returns `false` when the destination exists and the user declines to
    /// overwrite it; no filesystem call is made in that case.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn prepare_destination(
        &self,
        root: &Path,
        prompts: &mut PromptSequencer<'_>,
    ) -> ForgeResult<bool> {
        if !self.filesystem.exists(root) {
            return Ok(true);
        }

        let name = root
            .file_name()
            .map_or_else(|| root.display().to_string(), |n| n.to_string_lossy().into_owned());
        let message = format!("Directory \"{name}\" already exists. Overwrite?");
        if !prompts.confirm(&message, false)? {
            info!("Kept existing destination");
            return Ok(false);
        }

        info!("Removing existing destination");
        self.filesystem.remove_dir_all(root)?;
        Ok(true)
    }

    /// Create every declared directory, then write every file.
    ///
    /// Stops at the first failure. Files already written are left in place.
    #[instrument(skip_all, fields(root = %root.display(), files = bundle.file_count()))]
    pub fn write_bundle(&self, root: &Path, bundle: &ContentBundle) -> ForgeResult<EmitReport> {
        self.filesystem.create_dir_all(root)?;

        for dir in bundle.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        for file in bundle.files() {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
        }

        info!(
            directories = bundle.directories().len(),
            files = bundle.file_count(),
            "Bundle written"
        );

        Ok(EmitReport {
            root: root.to_path_buf(),
            files_written: bundle.file_count(),
            directories_created: bundle.directories().len(),
            install: InstallStatus::Skipped,
        })
    }

    /// Run the dependency install if the bundle has a manifest.
    ///
    /// A failed install is logged and reported, never returned as an error.
    pub fn install(&self, root: &Path, bundle: &ContentBundle) -> InstallStatus {
        let Some(installer) = &self.installer else {
            return InstallStatus::Skipped;
        };
        if !bundle.contains(MANIFEST) {
            info!("No manifest, skipping dependency install");
            return InstallStatus::Skipped;
        }

        let command = installer.describe();
        info!(%command, "Installing dependencies");
        match installer.install(root) {
            Ok(()) => InstallStatus::Succeeded,
            Err(e) => {
                warn!(%command, error = %e, "Dependency install failed");
                InstallStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Prepare, write and install in one go.
    pub fn emit(
        &self,
        root: &Path,
        bundle: &ContentBundle,
        prompts: &mut PromptSequencer<'_>,
    ) -> ForgeResult<EmitOutcome> {
        if !self.prepare_destination(root, prompts)? {
            return Ok(EmitOutcome::Cancelled);
        }

        let mut report = self.write_bundle(root, bundle)?;
        report.install = self.install(root, bundle);
        Ok(EmitOutcome::Written(report))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::MockDependencyInstaller;
    use crate::application::testing::{FakeTerminal, RecordingFs};
    use crate::domain::wizards::builder::keys;
    use crate::domain::{AnswerRecord, AnswerValue, resolve};
    use crate::error::ForgeError;

    /// Shares one recording filesystem between the emitter and the test.
    struct Shared(Arc<RecordingFs>);

    impl Filesystem for Shared {
        fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
            self.0.create_dir_all(path)
        }
        fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
            self.0.write_file(path, content)
        }
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }
        fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
            self.0.remove_dir_all(path)
        }
    }

    fn bundle(ecosystem: &str) -> ContentBundle {
        let mut record = AnswerRecord::new();
        record.insert(keys::ECOSYSTEM, AnswerValue::choice(ecosystem)).unwrap();
        record.insert(keys::PROJECT_NAME, AnswerValue::text("demo")).unwrap();
        resolve(&record).unwrap()
    }

    fn emitter(fs: &Arc<RecordingFs>) -> ProjectEmitter {
        ProjectEmitter::new(Box::new(Shared(Arc::clone(fs))))
    }

    fn written(outcome: EmitOutcome) -> EmitReport {
        match outcome {
            EmitOutcome::Written(report) => report,
            EmitOutcome::Cancelled => panic!("emit was cancelled"),
        }
    }

    #[test]
    fn vanilla_project_is_written_without_manifest() {
        let fs = Arc::new(RecordingFs::default());
        let mut terminal = FakeTerminal::new(&[]);
        let mut prompts = PromptSequencer::new(&mut terminal);

        let report = written(
            emitter(&fs)
                .emit(Path::new("demo"), &bundle("vanilla"), &mut prompts)
                .unwrap(),
        );

        assert!(fs.file(Path::new("demo/index.html")).is_some());
        assert!(fs.file(Path::new("demo/css/main.css")).is_some());
        assert!(fs.file(Path::new("demo/js/main.js")).is_some());
        assert!(fs.file(Path::new("demo/package.json")).is_none());
        assert!(fs.has_dir(Path::new("demo/images")));
        assert_eq!(report.install, InstallStatus::Skipped);
        assert!(terminal.prompts.is_empty());
    }

    #[test]
    fn declining_overwrite_touches_nothing() {
        let fs = Arc::new(RecordingFs::with_dir("demo"));
        let mut terminal = FakeTerminal::new(&["n"]);
        let mut prompts = PromptSequencer::new(&mut terminal);

        let outcome = emitter(&fs)
            .emit(Path::new("demo"), &bundle("vanilla"), &mut prompts)
            .unwrap();

        assert_eq!(outcome, EmitOutcome::Cancelled);
        assert_eq!(fs.mutations(), 0);
        assert_eq!(
            terminal.prompts,
            vec!["Directory \"demo\" already exists. Overwrite? (y/N): "]
        );
    }

    #[test]
    fn empty_answer_keeps_existing_destination() {
        let fs = Arc::new(RecordingFs::with_dir("demo"));
        let mut terminal = FakeTerminal::new(&[""]);
        let mut prompts = PromptSequencer::new(&mut terminal);

        let ready = emitter(&fs)
            .prepare_destination(Path::new("demo"), &mut prompts)
            .unwrap();

        assert!(!ready);
        assert_eq!(fs.mutations(), 0);
    }

    #[test]
    fn confirming_overwrite_replaces_destination() {
        let fs = Arc::new(RecordingFs::with_dir("demo"));
        fs.write_file(Path::new("demo/old.txt"), "stale").unwrap();
        let mut terminal = FakeTerminal::new(&["yes"]);
        let mut prompts = PromptSequencer::new(&mut terminal);

        written(
            emitter(&fs)
                .emit(Path::new("demo"), &bundle("vanilla"), &mut prompts)
                .unwrap(),
        );

        assert!(fs.file(Path::new("demo/old.txt")).is_none());
        assert!(fs.file(Path::new("demo/index.html")).is_some());
    }

    #[test]
    fn write_failure_is_fatal() {
        let fs = Arc::new(RecordingFs::failing_on("demo/css/main.css"));
        let err = emitter(&fs)
            .write_bundle(Path::new("demo"), &bundle("vanilla"))
            .unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn install_runs_for_projects_with_manifest() {
        let fs = Arc::new(RecordingFs::default());
        let mut installer = MockDependencyInstaller::new();
        installer.expect_describe().return_const("npm install".to_string());
        installer
            .expect_install()
            .withf(|root| root == Path::new("demo"))
            .times(1)
            .returning(|_| Ok(()));

        let emitter = emitter(&fs).with_installer(Box::new(installer));
        let react = bundle("react");
        emitter.write_bundle(Path::new("demo"), &react).unwrap();

        assert_eq!(emitter.install(Path::new("demo"), &react), InstallStatus::Succeeded);
    }

    #[test]
    fn install_failure_is_downgraded() {
        let fs = Arc::new(RecordingFs::default());
        let mut installer = MockDependencyInstaller::new();
        installer.expect_describe().return_const("npm install".to_string());
        installer.expect_install().times(1).returning(|_| {
            Err(ApplicationError::InstallFailed {
                command: "npm install".into(),
                reason: "npm not found".into(),
            }
            .into())
        });

        let mut terminal = FakeTerminal::new(&[]);
        let mut prompts = PromptSequencer::new(&mut terminal);
        let report = written(
            emitter(&fs)
                .with_installer(Box::new(installer))
                .emit(Path::new("demo"), &bundle("vue"), &mut prompts)
                .unwrap(),
        );

        assert!(matches!(report.install, InstallStatus::Failed { ref reason } if reason.contains("npm not found")));
        assert!(fs.file(Path::new("demo/package.json")).is_some());
    }

    #[test]
    fn install_skipped_without_manifest() {
        let fs = Arc::new(RecordingFs::default());
        let mut installer = MockDependencyInstaller::new();
        installer.expect_install().times(0);

        let emitter = emitter(&fs).with_installer(Box::new(installer));
        assert_eq!(
            emitter.install(Path::new("demo"), &bundle("vanilla")),
            InstallStatus::Skipped
        );
    }
}
