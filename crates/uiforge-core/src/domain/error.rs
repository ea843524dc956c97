// ============================================================================
// domain/error.rs - DOMAIN INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep them alongside partial results)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Answer record
    // ========================================================================
    #[error("answer '{key}' has already been recorded")]
    AnswerAlreadySet { key: String },

    #[error("unknown {kind} '{value}'")]
    UnknownChoice { kind: &'static str, value: String },

    #[error("invalid answer for '{key}': {reason}")]
    InvalidAnswer { key: String, reason: String },

    // ========================================================================
    // Questionnaire construction
    // ========================================================================
    #[error("question '{id}' is declared more than once")]
    DuplicateQuestion { id: &'static str },

    #[error("question '{question}' depends on '{key}', which is not asked before it")]
    ForwardReference {
        question: &'static str,
        key: &'static str,
    },

    #[error("question '{question}' offers no choices")]
    EmptyChoices { question: &'static str },

    #[error("question '{question}' has an invalid default: {reason}")]
    InvalidDefault {
        question: &'static str,
        reason: String,
    },

    // ========================================================================
    // Content bundle
    // ========================================================================
    #[error("duplicate path in bundle: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("content bundle is empty")]
    EmptyBundle,

    #[error("failed to serialise {artifact}: {reason}")]
    Serialization { artifact: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownChoice { kind, value } => vec![
                format!("'{value}' is not a recognised {kind}"),
                "Re-run the wizard and pick one of the listed options".into(),
            ],
            Self::InvalidAnswer { key, .. } => {
                vec![format!("Check the value supplied for '{key}'")]
            }
            Self::DuplicateQuestion { .. }
            | Self::ForwardReference { .. }
            | Self::EmptyChoices { .. }
            | Self::InvalidDefault { .. } => vec![
                "The questionnaire definition is inconsistent".into(),
                "This is a bug in uiforge, please report it".into(),
            ],
            Self::DuplicatePath { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Generated bundle contains an invalid path: {path}"),
                "This is a bug in uiforge, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AnswerAlreadySet { .. }
            | Self::UnknownChoice { .. }
            | Self::InvalidAnswer { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
