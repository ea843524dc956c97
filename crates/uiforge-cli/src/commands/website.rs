//! `uiforge website`: the eight-step website design workflow.
//!
//! Also reachable from the designer menu.

use std::path::Path;

use tracing::{info, instrument};

use uiforge_core::{
    domain::{
        report::{WEBSITE_REPORT_PREFIX, render_website_report},
        wizards::website,
    },
    prelude::*,
};

use crate::{
    cli::{GlobalArgs, WebsiteArgs},
    commands::{print_report, report_directory, save_report, session_terminal},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: WebsiteArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let save_dir = report_directory(args.save_dir, &config);
    let mut terminal = session_terminal(&output);
    let mut prompts = PromptSequencer::new(terminal.as_mut());
    run_workflow(&mut prompts, &save_dir, &output)
}

/// Ask every step, show the report, then offer to save it.
pub fn run_workflow(
    prompts: &mut PromptSequencer<'_>,
    save_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let questionnaire = website::questionnaire().map_err(ForgeError::from)?;

    output.print("")?;
    output.header("🏗️  COMPREHENSIVE WEBSITE DESIGN WORKFLOW")?;
    output.print("Following the complete 8-step process for professional website design")?;
    output.print("")?;

    let answers = match prompts.run(&questionnaire)? {
        SessionOutcome::Completed(answers) => answers,
        SessionOutcome::Cancelled => return Ok(()),
    };
    info!(answers = answers.len(), "Website workflow completed");

    output.print("")?;
    print_report(output, &render_website_report(&answers, &ReportFormat::Display))?;

    if prompts.confirm(
        "💾 Would you like to save this comprehensive report to a file?",
        false,
    )? {
        let path = save_report(save_dir, WEBSITE_REPORT_PREFIX, |format| {
            render_website_report(&answers, format)
        })?;
        output.success(&format!(
            "Comprehensive website design report saved to: {}",
            path.display()
        ))?;
    }
    Ok(())
}
