//! uiforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the uiforge
//! interactive UI wizards, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           uiforge-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (PromptSequencer, ProjectEmitter,       │
//! │  ReportService)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Terminal, Installer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     uiforge-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Questionnaire, AnswerRecord, resolve,  │
//! │  recommendation tables, reports)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uiforge_core::prelude::*;
//! use uiforge_core::domain::wizards::builder::{self, BuilderDefaults};
//!
//! # fn run(terminal: &mut dyn Terminal) -> ForgeResult<()> {
//! let questionnaire = builder::questionnaire(&BuilderDefaults::default())?;
//! if let SessionOutcome::Completed(record) = PromptSequencer::new(terminal).run(&questionnaire)? {
//!     let bundle = resolve(&record)?;
//!     println!("{} files", bundle.file_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EmitOutcome, EmitReport, InstallStatus, ProjectEmitter, PromptSequencer, ReportService,
        SessionOutcome,
        ports::{DependencyInstaller, Filesystem, Terminal},
    };
    pub use crate::domain::{
        AnswerRecord, AnswerValue, BuildSelection, ContentBundle, Questionnaire, ReportFormat,
        resolve,
    };
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
