//! Application ports (traits) for external dependencies.
//!
//! Adapters in `uiforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `Terminal`: line-oriented prompt/answer channel
//!   - `DependencyInstaller`: post-generation package install
//!
//! - **Driving (Input) Ports**: the CLI calls the services directly

pub mod output;

pub use output::{DependencyInstaller, Filesystem, Terminal};
