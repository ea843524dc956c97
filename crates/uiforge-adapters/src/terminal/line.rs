//! Line-oriented terminal over any reader and writer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use owo_colors::OwoColorize;
use uiforge_core::{
    application::{ApplicationError, ports::Terminal},
    error::{ForgeError, ForgeResult},
};

/// Reads answers from `R` and prints prompts to `W`.
///
/// Works the same for an interactive tty and for piped input, one answer
/// per line.
#[derive(Debug)]
pub struct LineTerminal<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl LineTerminal<StdinLock<'static>, Stdout> {
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(reader: R, writer: W, color: bool) -> Self {
        Self {
            reader,
            writer,
            color,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) -> ForgeResult<()> {
        writeln!(self.writer, "{text}").map_err(terminal_error)
    }
}

fn terminal_error(e: io::Error) -> ForgeError {
    ApplicationError::TerminalError {
        reason: e.to_string(),
    }
    .into()
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn write_line(&mut self, line: &str) -> ForgeResult<()> {
        self.emit(line)
    }

    fn write_heading(&mut self, line: &str) -> ForgeResult<()> {
        if self.color {
            let styled = line.bold().yellow().to_string();
            self.emit(&styled)
        } else {
            self.emit(line)
        }
    }

    fn write_error(&mut self, line: &str) -> ForgeResult<()> {
        if self.color {
            let styled = line.red().to_string();
            self.emit(&styled)
        } else {
            self.emit(line)
        }
    }

    fn read_line(&mut self, prompt: &str) -> ForgeResult<Option<String>> {
        let shown = if self.color {
            write!(self.writer, "{}", prompt.cyan())
        } else {
            write!(self.writer, "{prompt}")
        };
        shown
            .and_then(|()| self.writer.flush())
            .map_err(terminal_error)?;

        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf).map_err(terminal_error)?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}
