//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases,
//! help text and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "uiforge",
    bin_name = "uiforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Interactive frontend scaffolding and UI design wizards",
    long_about = "uiforge asks a short series of questions and then either \
                  generates a ready-to-run frontend project or writes a \
                  structured UI/website design brief.",
    after_help = "EXAMPLES:\n\
        \x20 uiforge build\n\
        \x20 uiforge build --dir ~/projects --no-install\n\
        \x20 uiforge design --save-dir ./briefs\n\
        \x20 uiforge completions bash > /usr/share/bash-completion/completions/uiforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a frontend project interactively.
    #[command(
        visible_alias = "b",
        about = "Generate a frontend project",
        after_help = "EXAMPLES:\n\
            \x20 uiforge build\n\
            \x20 uiforge build --dir /tmp --dry-run"
    )]
    Build(BuildArgs),

    /// Write a UI/UX design prompt.
    #[command(visible_alias = "d", about = "Create a UI/UX design prompt")]
    Design(DesignArgs),

    /// Walk through the full website design workflow.
    #[command(visible_alias = "w", about = "Run the website design workflow")]
    Website(WebsiteArgs),

    /// Create a default configuration file.
    #[command(about = "Initialize configuration")]
    Init(InitArgs),

    /// Inspect configuration.
    #[command(subcommand, about = "Show configuration")]
    Config(ConfigCommands),

    /// Generate shell completions.
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

// ── build ─────────────────────────────────────────────────────────────────────

/// Arguments for `uiforge build`.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Directory the project folder is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Skip the dependency install step.
    #[arg(long = "no-install", help = "Do not run the package manager")]
    pub no_install: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── design / website ──────────────────────────────────────────────────────────

/// Arguments for `uiforge design`.
#[derive(Debug, Args)]
pub struct DesignArgs {
    /// Where saved prompts and reports go.
    #[arg(long = "save-dir", value_name = "DIR", help = "Directory for saved reports")]
    pub save_dir: Option<PathBuf>,
}

/// Arguments for `uiforge website`.
#[derive(Debug, Args)]
pub struct WebsiteArgs {
    /// Where the saved report goes.
    #[arg(long = "save-dir", value_name = "DIR", help = "Directory for saved reports")]
    pub save_dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `uiforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `uiforge config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        /// Dotted key, e.g. `defaults.project_name`.
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the default configuration file path.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `uiforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}
