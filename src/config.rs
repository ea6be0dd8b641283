//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/dockwrap/dockwrap.toml` (or `--config <file>`)
//! 3. Environment variables: `DOCKWRAP_*` prefix
//!
//! Command templates and the record delimiter are fixed and not configurable.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::infrastructure::traits::default_shell;

/// How responses are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON envelope
    Json,
    /// Indented JSON envelope
    #[default]
    Pretty,
    /// Status line followed by the payload
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Pretty => f.write_str("pretty"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Release catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of extra release records appended to the built-in ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_file: Option<PathBuf>,
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub output: Option<OutputFormat>,
    pub shell: Option<String>,
    pub catalog: RawCatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCatalogConfig {
    pub extra_file: Option<PathBuf>,
}

/// Unified configuration for dockwrap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format for responses (default: pretty)
    pub output: OutputFormat,
    /// Shell used to run command lines (default: sh, cmd on Windows)
    pub shell: String,
    /// Release catalog settings
    pub catalog: CatalogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            shell: default_shell().to_string(),
            catalog: CatalogConfig::default(),
        }
    }
}

/// Get the XDG config directory for dockwrap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dockwrap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dockwrap.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    ///
    /// Unknown variables are left as written.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.catalog.extra_file {
            let raw = path.to_string_lossy();
            let expanded = shellexpand::full(raw.as_ref())
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| shellexpand::tilde(raw.as_ref()).into_owned());
            self.catalog.extra_file = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay a raw file config: specified fields win.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            output: overlay.output.unwrap_or(self.output),
            shell: overlay.shell.clone().unwrap_or_else(|| self.shell.clone()),
            catalog: CatalogConfig {
                extra_file: overlay
                    .catalog
                    .extra_file
                    .clone()
                    .or_else(|| self.catalog.extra_file.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global file lookup
    ///
    /// An explicit file must exist. The global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();

        Ok(current)
    }

    /// Apply DOCKWRAP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("DOCKWRAP")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("output") {
            settings.output = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("DOCKWRAP_OUTPUT: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("shell") {
            settings.shell = val;
        }
        if let Ok(val) = config.get_string("catalog.extra_file") {
            settings.catalog.extra_file = Some(PathBuf::from(val));
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dockwrap configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/dockwrap/dockwrap.toml  (or --config <file>)
#   Env:  DOCKWRAP_* environment variables (nested keys use "__",
#         e.g. DOCKWRAP_CATALOG__EXTRA_FILE)

# Response output: "json", "pretty" or "text"
# output = "pretty"

# Shell used to run docker command lines
# shell = "sh"

[catalog]
# JSON array of extra release records, appended to the built-in list
# extra_file = "~/.config/dockwrap/releases.json"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
