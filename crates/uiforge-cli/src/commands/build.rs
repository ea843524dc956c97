//! Implementation of the `uiforge build` command.
//!
//! Responsibility: run the builder questionnaire, resolve the answers into
//! a content bundle and hand it to the emitter. No business logic lives
//! here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use uiforge_adapters::{CommandInstaller, LocalFilesystem};
use uiforge_core::{
    domain::{
        Ecosystem,
        wizards::builder::{self, BuilderDefaults, keys},
    },
    prelude::*,
};

use crate::{
    cli::{BuildArgs, GlobalArgs, OutputFormat},
    commands::session_terminal,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `uiforge build` command.
///
/// Dispatch sequence:
/// 1. Build the questionnaire from configured defaults
/// 2. Run the session (cancellation ends here with success)
/// 3. Resolve the answers into a content bundle
/// 4. Early-exit if `--dry-run`
/// 5. Confirm overwrite, write the bundle, install dependencies
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: BuildArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let defaults = builder_defaults(&config)?;
    let questionnaire = builder::questionnaire(&defaults).map_err(ForgeError::from)?;

    output.header("🎨 Welcome to Frontend UI Builder CLI")?;
    output.print("Answer a few questions and get your complete frontend UI ready!")?;
    output.print("")?;

    let mut terminal = session_terminal(&output);
    let mut prompts = PromptSequencer::new(terminal.as_mut());

    let answers = match prompts.run(&questionnaire)? {
        SessionOutcome::Completed(answers) => answers,
        SessionOutcome::Cancelled => {
            output.warning("Project generation cancelled.")?;
            return Ok(());
        }
    };

    let bundle = resolve(&answers).map_err(ForgeError::from)?;
    let project_name = answers
        .text(keys::PROJECT_NAME)
        .unwrap_or(defaults.project_name.as_str())
        .to_string();
    let root = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(&project_name);
    let ecosystem = answers
        .text(keys::ECOSYSTEM)
        .and_then(|tag| tag.parse::<Ecosystem>().ok())
        .unwrap_or_default();

    debug!(
        project = %project_name,
        ecosystem = %ecosystem.as_str(),
        files = bundle.file_count(),
        "Bundle resolved"
    );

    if args.dry_run {
        return show_dry_run(&root, &bundle, &output);
    }

    let mut emitter = ProjectEmitter::new(Box::new(LocalFilesystem::new()));
    let installing = config.install.enabled && !args.no_install;
    if installing {
        emitter = emitter.with_installer(Box::new(CommandInstaller::new(
            config.install.program.clone(),
            config.install.args.clone(),
        )));
    }

    if !emitter.prepare_destination(&root, &mut prompts)? {
        output.warning("Project generation cancelled.")?;
        return Ok(());
    }

    output.info("Generating your project...")?;
    info!(project = %project_name, path = %root.display(), "Generation started");

    let spinner = output.spinner(&format!("Writing {} files", bundle.file_count()));
    let written = emitter.write_bundle(&root, &bundle);
    spinner.finish_and_clear();
    let mut report = written?;

    if installing && ecosystem.uses_package_manager() {
        output.info("Installing dependencies...")?;
    }
    report.install = emitter.install(&root, &bundle);
    match &report.install {
        InstallStatus::Succeeded => output.success("Dependencies installed")?,
        InstallStatus::Failed { reason } => output.warning(&format!(
            "Failed to install dependencies automatically ({reason}). Please run '{}' manually.",
            install_command(&config)
        ))?,
        InstallStatus::Skipped => {}
    }

    info!(
        files = report.files_written,
        directories = report.directories_created,
        "Generation completed"
    );

    if output.format() == OutputFormat::Json {
        return output
            .json(&json!({
                "root": report.root.display().to_string(),
                "files_written": report.files_written,
                "directories_created": report.directories_created,
                "install": install_label(&report.install),
            }))
            .map_err(CliError::from);
    }

    output.success("Project generated successfully!")?;
    show_next_steps(&project_name, &root, ecosystem, &report, &config, &output)
}

/// Prompt defaults from config. An unknown ecosystem tag is a config error.
fn builder_defaults(config: &AppConfig) -> CliResult<BuilderDefaults> {
    let ecosystem = match config.defaults.ecosystem.as_deref() {
        Some(tag) => tag.parse::<Ecosystem>().map_err(|e| CliError::ConfigError {
            message: format!("defaults.ecosystem: {e}"),
            source: None,
        })?,
        None => Ecosystem::default(),
    };
    Ok(BuilderDefaults {
        project_name: config.defaults.project_name.clone(),
        ecosystem,
    })
}

fn install_command(config: &AppConfig) -> String {
    std::iter::once(config.install.program.as_str())
        .chain(config.install.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn install_label(status: &InstallStatus) -> &'static str {
    match status {
        InstallStatus::Skipped => "skipped",
        InstallStatus::Succeeded => "succeeded",
        InstallStatus::Failed { .. } => "failed",
    }
}

fn show_dry_run(root: &Path, bundle: &ContentBundle, output: &OutputManager) -> CliResult<()> {
    let directories: Vec<String> = bundle
        .directories()
        .iter()
        .map(|d| d.display().to_string())
        .collect();
    let files: Vec<String> = bundle
        .files()
        .iter()
        .map(|f| f.path.display().to_string())
        .collect();

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "root": root.display().to_string(),
            "directories": directories,
            "files": files,
        }))?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create {}", root.display()))?;
    for dir in &directories {
        output.payload(&format!("  {dir}/"))?;
    }
    for file in &files {
        output.payload(&format!("  {file}"))?;
    }
    Ok(())
}

fn show_next_steps(
    project_name: &str,
    root: &Path,
    ecosystem: Ecosystem,
    report: &EmitReport,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_quiet() {
        return Ok(());
    }

    output.print("")?;
    output.print(&format!("📁 Project location: {}", root.display()))?;
    output.print("🚀 Next steps:")?;
    output.print(&format!("   1. cd {project_name}"))?;
    if ecosystem.uses_package_manager() {
        if report.install != InstallStatus::Succeeded {
            output.print(&format!("   2. {} (if not already done)", install_command(config)))?;
        }
        output.print(&format!(
            "   3. {} (dev server on port {})",
            ecosystem.start_command(),
            ecosystem.dev_port()
        ))?;
    } else {
        output.print(&format!("   2. {}", ecosystem.start_command()))?;
    }

    output.print("")?;
    output.print("💡 Tips:")?;
    output.print("   • Check the README.md for detailed instructions")?;
    output.print("   • Customize colors in the CSS variables")?;
    output.print("   • Add your content and functionality")?;
    Ok(())
}
