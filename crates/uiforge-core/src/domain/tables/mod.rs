//! Static recommendation tables. Never mutated, never empty.

pub mod designer;
pub mod website;
