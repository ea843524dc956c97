//! Terminal adapters.

mod line;
mod scripted;

pub use line::LineTerminal;
pub use scripted::ScriptedTerminal;
