//! Application layer for uiforge.
//!
//! This layer contains:
//! - **Services**: use case orchestration (PromptSequencer, ProjectEmitter, ReportService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only drives them.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    EmitOutcome, EmitReport, InstallStatus, ProjectEmitter, PromptSequencer, ReportService,
    SessionOutcome,
};

pub use ports::{DependencyInstaller, Filesystem, Terminal};

pub use error::ApplicationError;
