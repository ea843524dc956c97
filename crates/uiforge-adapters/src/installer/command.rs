//! Installer that runs an external package manager.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};
use uiforge_core::{
    application::{ApplicationError, ports::DependencyInstaller},
    error::ForgeResult,
};

/// Runs `program args...` inside the project root, inheriting stdout and
/// stderr so the package manager's own progress stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInstaller {
    program: String,
    args: Vec<String>,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `npm install`.
    pub fn npm() -> Self {
        Self::new("npm", vec!["install".to_string()])
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::npm()
    }
}

impl DependencyInstaller for CommandInstaller {
    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[instrument(skip(self), fields(command = %self.describe()))]
    fn install(&self, project_root: &Path) -> ForgeResult<()> {
        let failed = |reason: String| ApplicationError::InstallFailed {
            command: self.describe(),
            reason,
        };

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| failed(e.to_string()))?;

        debug!(%status, "Installer exited");
        if status.success() {
            Ok(())
        } else {
            Err(failed(format!("exited with {status}")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_full_command_line() {
        assert_eq!(CommandInstaller::npm().describe(), "npm install");
        assert_eq!(
            CommandInstaller::new("pnpm", vec!["i".into(), "--silent".into()]).describe(),
            "pnpm i --silent"
        );
    }

    #[test]
    fn missing_program_is_install_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandInstaller::new("uiforge-no-such-program", Vec::new())
            .install(dir.path())
            .unwrap_err();

        assert!(err.to_string().contains("uiforge-no-such-program"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_success() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CommandInstaller::new("true", Vec::new()).install(dir.path()).is_ok());
        assert!(CommandInstaller::new("false", Vec::new()).install(dir.path()).is_err());
    }
}
