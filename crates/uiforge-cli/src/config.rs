//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `UIFORGE__*` environment variables, e.g. `UIFORGE__INSTALL__ENABLED=false`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use uiforge_core::domain::wizards::builder::DEFAULT_PROJECT_NAME;

const ENV_PREFIX: &str = "UIFORGE";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults offered by the builder prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Dependency install step after a project is generated.
    pub install: InstallConfig,
    /// Saved design reports.
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub project_name: String,
    /// Ecosystem tag preselected in the framework question.
    pub ecosystem: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Defaults to the working directory when unset.
    pub directory: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                project_name: DEFAULT_PROJECT_NAME.into(),
                ecosystem: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            install: InstallConfig {
                enabled: true,
                program: "npm".into(),
                args: vec!["install".into()],
            },
            reports: ReportsConfig { directory: None },
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file and the
    /// environment.
    ///
    /// A file passed explicitly via `--config` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let loaded = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("install.args")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        loaded
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.uiforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "uiforge", "uiforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".uiforge.toml"))
    }

    /// Look up one value by dotted key, rendered as text.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.project_name" => self.defaults.project_name.clone(),
            "defaults.ecosystem" => self.defaults.ecosystem.clone().unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "install.enabled" => self.install.enabled.to_string(),
            "install.program" => self.install.program.clone(),
            "install.args" => self.install.args.join(" "),
            "reports.directory" => self
                .reports
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}
