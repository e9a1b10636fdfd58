//! Configuration file loading with precedence handling.

use crate::state::{ViewOptions, DEFAULT_RAW_PANEL_HEIGHT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "ELV_CONFIG";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "ELV_LOG_FILE";
/// Environment variable overriding the kubectl executable.
pub const ENV_KUBECTL: &str = "ELV_KUBECTL";
/// Conventional switch that disables colors when set to anything.
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Smallest usable raw panel: one content line plus borders.
pub const MIN_RAW_PANEL_HEIGHT: u16 = 3;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/elv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Height of the raw JSON panel, borders included.
    #[serde(default)]
    pub raw_panel_height: Option<u16>,

    /// kubectl executable used for container logs.
    #[serde(default)]
    pub kubectl: Option<String>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Raw panel height, never below [`MIN_RAW_PANEL_HEIGHT`].
    pub raw_panel_height: u16,
    /// kubectl executable.
    pub kubectl: String,
    /// Whether the palette is applied.
    pub colors_enabled: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_path(),
            raw_panel_height: DEFAULT_RAW_PANEL_HEIGHT,
            kubectl: "kubectl".to_string(),
            colors_enabled: true,
        }
    }
}

impl ResolvedConfig {
    /// Rendering options for the viewer.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            raw_panel_height: self.raw_panel_height,
            colors_enabled: self.colors_enabled,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/elv/elv.log` on Linux, or the platform state
/// directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("elv").join("elv.log")
    } else {
        PathBuf::from("elv.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/elv/config.toml` on Linux, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("elv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ELV_CONFIG` environment variable
/// 3. Default path `~/.config/elv/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        raw_panel_height: config
            .raw_panel_height
            .map(|h| h.max(MIN_RAW_PANEL_HEIGHT))
            .unwrap_or(defaults.raw_panel_height),
        kubectl: config.kubectl.unwrap_or(defaults.kubectl),
        colors_enabled: !config.no_color.unwrap_or(!defaults.colors_enabled),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `ELV_LOG_FILE`, `ELV_KUBECTL`, and `NO_COLOR`.
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_env_overrides_from(config, |name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
}

/// Same as [`apply_env_overrides`] with an injectable variable lookup.
pub fn apply_env_overrides_from<F>(mut config: ResolvedConfig, lookup: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.is_empty()) {
        config.log_file_path = PathBuf::from(path);
    }

    if let Some(kubectl) = lookup(ENV_KUBECTL).filter(|k| !k.is_empty()) {
        config.kubectl = kubectl;
    }

    if lookup(ENV_NO_COLOR).is_some() {
        config.colors_enabled = false;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, no_color_override: Option<bool>) -> ResolvedConfig {
    if no_color_override == Some(true) {
        config.colors_enabled = false;
    }

    config
}

/// Run the whole precedence chain.
///
/// # Errors
///
/// Returns error if a config file exists but cannot be read or parsed.
pub fn resolve(config_path: Option<PathBuf>, no_color_flag: bool) -> Result<ResolvedConfig, ConfigError> {
    let config_file = load_config_with_precedence(config_path)?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);
    Ok(apply_cli_overrides(with_env, no_color_flag.then_some(true)))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
