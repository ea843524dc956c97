//! Questionnaire definitions for the three wizards.

pub mod builder;
pub mod designer;
pub mod website;
