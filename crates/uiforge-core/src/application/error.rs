//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a wizard session.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading from or writing to the terminal failed.
    #[error("Terminal error: {reason}")]
    TerminalError { reason: String },

    /// Input ended while a question was still waiting for an answer.
    #[error("Input closed before the question '{question}' was answered")]
    InputClosed { question: String },

    /// The dependency installation command failed.
    #[error("Dependency installation via `{command}` failed: {reason}")]
    InstallFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TerminalError { .. } => vec![
                "The terminal could not be read or written".into(),
                "Run uiforge from an interactive shell".into(),
            ],
            Self::InputClosed { .. } => vec![
                "Standard input ended before every question was answered".into(),
                "When piping answers, supply one line per question".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                format!("Run `{command}` manually inside the project directory"),
                "Ensure the command is installed and in your PATH".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::TerminalError { .. } | Self::InputClosed { .. } => ErrorCategory::Interaction,
            Self::InstallFailed { .. } => ErrorCategory::Internal,
        }
    }
}
