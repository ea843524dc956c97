//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments and config into calls on the core services
//! and print the results. Wizard logic lives in `uiforge-core`.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use uiforge_adapters::{LineTerminal, LocalFilesystem};
use uiforge_core::{application::services::report_file_name, prelude::*};

use crate::{cli::OutputFormat, config::AppConfig, error::CliResult, output::OutputManager};

pub mod build;
pub mod completions;
pub mod config;
pub mod design;
pub mod init;
pub mod website;

/// Interactive terminal for a wizard session.
///
/// Prompts go to stderr when stdout carries JSON.
pub(crate) fn session_terminal(output: &OutputManager) -> Box<dyn Terminal> {
    if output.format() == OutputFormat::Json {
        Box::new(LineTerminal::new(io::stdin().lock(), io::stderr(), false))
    } else {
        Box::new(LineTerminal::stdio(output.supports_color()))
    }
}

/// Directory saved reports go to: the flag, then config, then the working
/// directory.
pub(crate) fn report_directory(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.reports.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Render a report for saving and write it as `<prefix>-<millis>.txt`.
pub(crate) fn save_report(
    directory: &Path,
    prefix: &str,
    render: impl FnOnce(&ReportFormat) -> String,
) -> CliResult<PathBuf> {
    save_report_at(Local::now(), directory, prefix, render)
}

fn save_report_at(
    now: DateTime<Local>,
    directory: &Path,
    prefix: &str,
    render: impl FnOnce(&ReportFormat) -> String,
) -> CliResult<PathBuf> {
    let format = ReportFormat::saved(now.format("%Y-%m-%d %H:%M:%S").to_string());
    let millis = u128::try_from(now.timestamp_millis()).unwrap_or_default();
    let path = ReportService::new(Box::new(LocalFilesystem::new())).save(
        directory,
        &report_file_name(prefix, millis),
        &render(&format),
    )?;
    Ok(path)
}

/// Print a rendered report, colouring palette swatches.
pub(crate) fn print_report(output: &OutputManager, report: &str) -> io::Result<()> {
    for line in report.lines() {
        if line.starts_with("██████") {
            output.swatch(line)?;
        } else {
            output.payload(line)?;
        }
    }
    Ok(())
}
