//! Pre-scripted terminal for tests and non-interactive runs.

use std::collections::VecDeque;

use uiforge_core::{application::ports::Terminal, error::ForgeResult};

/// Answers prompts from a fixed script and keeps a transcript.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    errors: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt and line written, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Input errors shown before re-prompting.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn write_line(&mut self, line: &str) -> ForgeResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> ForgeResult<()> {
        self.errors.push(line.to_string());
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> ForgeResult<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
