//! Infrastructure adapters for uiforge.
//!
//! This crate implements the ports defined in `uiforge_core::application::ports`.
//! It contains all I/O: the filesystem, the interactive terminal and the
//! dependency installer process.

pub mod filesystem;
pub mod installer;
pub mod terminal;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::CommandInstaller;
pub use terminal::{LineTerminal, ScriptedTerminal};
