//! Core domain layer for uiforge.
//!
//! Pure logic only: questionnaires, answer records, the selection resolver,
//! recommendation tables and report rendering. Prompting and file I/O are
//! reached through the ports in `crate::application`.
//!
//! ## Rules
//!
//! - **No I/O**: no filesystem, terminal or process calls
//! - **No logging**: services in the application layer trace instead
//! - **Explicit state**: a session is an [`AnswerRecord`] value, never ambient

pub mod answers;
pub mod bundle;
pub mod choices;
pub mod error;
pub mod manifest;
pub mod question;
pub mod render;
pub mod report;
pub mod resolver;
pub mod selection;
pub mod tables;
pub mod wizards;

mod templates;

pub use answers::{AnswerRecord, AnswerValue};
pub use bundle::{BundleFile, ContentBundle};
pub use choices::{
    ColorScheme, ColorTheme, CssFramework, DesignStyle, Ecosystem, InterfaceType, StateManager,
    UiType, VisualStyle,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::PackageManifest;
pub use question::{Choice, Question, QuestionKind, Questionnaire, Visibility};
pub use render::RenderContext;
pub use report::ReportFormat;
pub use resolver::{resolve, resolve_selection};
pub use selection::BuildSelection;
