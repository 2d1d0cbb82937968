//! Configuration file loading with precedence handling.

use crate::model::BubbleOptions;
use crate::state::DEFAULT_DRAG_MULTIPLIER;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "HEXBUBBLE_CONFIG";
/// Environment variable overriding `bubble.compact`.
pub const ENV_COMPACT: &str = "HEXBUBBLE_COMPACT";
/// Environment variable overriding `bubble.show_guides`.
pub const ENV_SHOW_GUIDES: &str = "HEXBUBBLE_SHOW_GUIDES";
/// Environment variable overriding `bubble.gravitation`.
pub const ENV_GRAVITATION: &str = "HEXBUBBLE_GRAVITATION";

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

    /// A resolved setting is out of range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hexbubble/config.toml`:
///
/// ```toml
/// drag_multiplier = 1.5
///
/// [bubble]
/// size = 180
/// compact = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Scroll distance per unit of pointer movement while dragging.
    #[serde(default)]
    pub drag_multiplier: Option<f64>,

    /// Layout options.
    #[serde(default)]
    pub bubble: Option<BubbleOptions>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Layout options. Unset fields fall back to the layout defaults when
    /// the field is built.
    pub bubble: BubbleOptions,
    /// Drag multiplier.
    pub drag_multiplier: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            bubble: BubbleOptions::default(),
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Check settings that are not covered by layout validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `drag_multiplier` is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_multiplier.is_finite() || self.drag_multiplier <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "drag_multiplier",
                reason: format!("must be positive (got {})", self.drag_multiplier),
            });
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/hexbubble/hexbubble.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hexbubble").join("hexbubble.log")
    } else {
        PathBuf::from("hexbubble.log")
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
/// Returns `~/.config/hexbubble/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hexbubble").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HEXBUBBLE_CONFIG` environment variable
/// 3. Default path `~/.config/hexbubble/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

/// Parse a boolean env value: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read `name` and parse it, logging and ignoring values that fail to parse.
fn env_override<T>(name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        warn!(var = name, value = %raw, "Ignoring unparseable environment override");
    }
    parsed
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HEXBUBBLE_COMPACT`: Override `bubble.compact`
/// - `HEXBUBBLE_SHOW_GUIDES`: Override `bubble.show_guides`
/// - `HEXBUBBLE_GRAVITATION`: Override `bubble.gravitation`
///
/// Values that do not parse are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(compact) = env_override(ENV_COMPACT, parse_bool) {
        config.bubble.compact = Some(compact);
    }

    if let Some(show_guides) = env_override(ENV_SHOW_GUIDES, parse_bool) {
        config.bubble.show_guides = Some(show_guides);
    }

    if let Some(gravitation) = env_override(ENV_GRAVITATION, |v| v.trim().parse::<f64>().ok()) {
        config.bubble.gravitation = Some(gravitation);
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        bubble: defaults
            .bubble
            .merged_with(&config.bubble.unwrap_or_default()),
        drag_multiplier: config.drag_multiplier.unwrap_or(defaults.drag_multiplier),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `compact_override` - From `--compact`
/// * `guides_override` - From `--guides`
/// * `gravitation_override` - From `--gravitation`
/// * `cols_override` - From `--cols`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    compact_override: Option<bool>,
    guides_override: Option<bool>,
    gravitation_override: Option<f64>,
    cols_override: Option<usize>,
) -> ResolvedConfig {
    let overrides = BubbleOptions {
        compact: compact_override,
        show_guides: guides_override,
        gravitation: gravitation_override,
        num_cols: cols_override,
        ..BubbleOptions::default()
    };
    config.bubble = config.bubble.merged_with(&overrides);
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
