//! Error handling for the uiforge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use uiforge_core::error::{ErrorCategory as CoreCategory, ForgeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `uiforge-core`.
    #[error("{0}")]
    Core(#[from] ForgeError),

    /// A configuration file could not be read, parsed, or written, or a
    /// configured value is unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation outside the core ports failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Show the config file location: uiforge config path".into(),
                "Recreate a default config: uiforge init --force".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Interaction => ErrorCategory::UserError,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!("\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!("\n  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (invalid answers, closed input).
    UserError,
    /// Configuration error.
    Configuration,
    /// Filesystem, terminal or internal failure.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiforge_core::application::ApplicationError;

    fn core(err: ApplicationError) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn closed_input_is_a_user_error() {
        let err = core(ApplicationError::InputClosed {
            question: "projectName".into(),
        });
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn filesystem_failure_is_internal() {
        let err = core(ApplicationError::FilesystemError {
            path: "demo/index.html".into(),
            reason: "permission denied".into(),
        });
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "unknown ecosystem 'angular'".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
        assert!(err.format_plain(false).contains("uiforge init --force"));
    }

    #[test]
    fn plain_format_has_no_ansi_codes() {
        let err = CliError::from(std::io::Error::other("disk full"));
        let text = err.format_plain(true);
        assert!(text.contains("Error: I/O error: disk full"));
        assert!(text.contains("Caused by: disk full"));
        assert!(!text.contains('\u{1b}'));
    }
}
