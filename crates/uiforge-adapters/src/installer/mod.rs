//! Dependency installer adapters.

mod command;

pub use command::CommandInstaller;
