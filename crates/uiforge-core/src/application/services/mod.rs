//! Application services - orchestrate use cases.

pub mod emitter;
pub mod report_service;
pub mod sequencer;

pub use emitter::{EmitOutcome, EmitReport, InstallStatus, ProjectEmitter};
pub use report_service::{ReportService, report_file_name};
pub use sequencer::{PromptSequencer, SessionOutcome};
