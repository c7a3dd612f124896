//! Demo binary configuration.
//!
//! The demo optionally reads a `lineterm.toml` from the working
//! directory: prompt, blink rate, start theme, history flag, and extra
//! themes registered before the widget mounts. CLI flags win over file
//! values, file values win over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ValidationError};

/// Config file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "lineterm.toml";

/// One `[[themes]]` entry, registered before the widget mounts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ThemeEntry {
    pub name: String,
    pub background: String,
    pub foreground: String,
}

/// Parsed demo configuration. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Prompt prefix shown before the input line.
    pub prompt: Option<String>,
    /// Cursor blink interval in milliseconds.
    pub rate_ms: Option<u64>,
    /// Theme applied at startup.
    pub theme: Option<String>,
    /// Record submitted lines for Up/Down recall.
    pub history: Option<bool>,
    /// Extra themes beyond the built-in ones.
    pub themes: Vec<ThemeEntry>,
}

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from --config).
/// Without an override, a missing `lineterm.toml` yields defaults; an
/// explicit path must be readable.
pub fn load_config(path_override: Option<&Path>) -> Result<DemoConfig, ConfigError> {
    let (path, required) = match path_override {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if !required && !path.exists() {
        return Ok(DemoConfig::default());
    }
    let text = std::fs::read_to_string(&path)?;
    parse_config(&text)
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str) -> Result<DemoConfig, ConfigError> {
    let config: DemoConfig = toml::from_str(text)?;
    if config.rate_ms == Some(0) {
        return Err(ConfigError::Invalid(ValidationError::ZeroBlinkInterval));
    }
    Ok(config)
}
