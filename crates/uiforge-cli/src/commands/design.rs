//! `uiforge design`: UI/UX design prompt wizard with its follow-up menu.

use std::path::Path;

use tracing::{debug, instrument};

use uiforge_core::{
    domain::{
        report::{DESIGN_PROMPT_PREFIX, palette_lines, render_design_prompt},
        tables::designer::{ACCESSIBILITY_CHECKLIST, MOBILE_GUIDELINES, color_palette},
        wizards::designer::{self, MenuAction, keys},
    },
    prelude::*,
};

use crate::{
    cli::{DesignArgs, GlobalArgs},
    commands::{print_report, report_directory, save_report, session_terminal, website},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Run the designer, then loop over the follow-up menu until Exit.
#[instrument(skip_all)]
pub fn execute(
    args: DesignArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let save_dir = report_directory(args.save_dir, &config);
    let questionnaire = designer::questionnaire().map_err(ForgeError::from)?;

    let mut terminal = session_terminal(&output);
    let mut prompts = PromptSequencer::new(terminal.as_mut());

    show_welcome(&output)?;
    let Some(mut answers) = collect(&mut prompts, &questionnaire)? else {
        return Ok(());
    };
    show_prompt(&answers, &output)?;

    loop {
        prompts.terminal().write_line("")?;
        let index = prompts.choose(
            "🎯 What would you like to do next?",
            &MenuAction::choices(),
            None,
        )?;
        let Some(action) = MenuAction::from_index(index) else {
            continue;
        };
        debug!(?action, "Menu action selected");

        match action {
            MenuAction::CreateAnother => {
                show_welcome(&output)?;
                let Some(next) = collect(&mut prompts, &questionnaire)? else {
                    break;
                };
                answers = next;
                show_prompt(&answers, &output)?;
            }
            MenuAction::SavePrompt => save_prompt(&mut prompts, &answers, &save_dir, &output)?,
            MenuAction::ColorPalettes => show_palettes(&answers, &output)?,
            MenuAction::MobileGuidelines => {
                show_list(&output, "📱 MOBILE-SPECIFIC GUIDELINES:", MOBILE_GUIDELINES, "•")?
            }
            MenuAction::AccessibilityChecklist => {
                show_list(&output, "♿ WEB ACCESSIBILITY CHECKLIST:", ACCESSIBILITY_CHECKLIST, "•")?
            }
            MenuAction::WebsiteWorkflow => website::run_workflow(&mut prompts, &save_dir, &output)?,
            MenuAction::Exit => break,
        }
    }

    output.success("Thank you for using UI Designer CLI!")?;
    Ok(())
}

fn show_welcome(output: &OutputManager) -> CliResult<()> {
    output.header("🎨 Welcome to UI Designer CLI")?;
    output.print("Generate UI/UX design prompts and templates for your projects")?;
    output.print("")?;
    Ok(())
}

/// Each run starts from an empty record.
fn collect(
    prompts: &mut PromptSequencer<'_>,
    questionnaire: &Questionnaire,
) -> CliResult<Option<AnswerRecord>> {
    match prompts.run(questionnaire)? {
        SessionOutcome::Completed(answers) => Ok(Some(answers)),
        SessionOutcome::Cancelled => Ok(None),
    }
}

fn show_prompt(answers: &AnswerRecord, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("Generating your UI/UX design prompt...")?;
    output.print("")?;
    print_report(output, &render_design_prompt(answers, &ReportFormat::Display))?;
    Ok(())
}

fn save_prompt(
    prompts: &mut PromptSequencer<'_>,
    answers: &AnswerRecord,
    directory: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if !prompts.confirm("💾 Would you like to save this design prompt to a file?", false)? {
        return Ok(());
    }
    let path = save_report(directory, DESIGN_PROMPT_PREFIX, |format| {
        render_design_prompt(answers, format)
    })?;
    output.success(&format!("Design prompt saved to: {}", path.display()))?;
    Ok(())
}

fn show_palettes(answers: &AnswerRecord, output: &OutputManager) -> CliResult<()> {
    let style = answers.text(keys::DESIGN_STYLE).unwrap_or_default();
    output.print("")?;
    output.header("🎨 COLOR PALETTE SUGGESTIONS:")?;
    output.payload(&format!("For {style} style:"))?;
    for line in palette_lines(color_palette(style)) {
        output.swatch(&line)?;
    }
    Ok(())
}

fn show_list(output: &OutputManager, heading: &str, items: &[&str], marker: &str) -> CliResult<()> {
    output.print("")?;
    output.header(heading)?;
    for item in items {
        output.payload(&format!("{marker} {item}"))?;
    }
    Ok(())
}
