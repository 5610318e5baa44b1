//! Configuration loading, validation, and management for PromptSmith.
//!
//! Loads configuration from `~/.promptsmith/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use promptsmith_core::DocumentFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.promptsmith/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Share link configuration
    #[serde(default)]
    pub share: ShareConfig,

    /// Session persistence
    #[serde(default)]
    pub store: StoreConfig,

    /// Document export defaults
    #[serde(default)]
    pub export: ExportConfig,

    /// Rendering behaviour
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL for share links. Without it `share` prints the bare token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// "file" or "memory"
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Session file (defaults to `~/.promptsmith/session.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Save the session after every mutating command
    #[serde(default = "default_true")]
    pub autosave: bool,
}

fn default_store_backend() -> String {
    "file".into()
}
fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: None,
            autosave: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// "json" or "toml"
    #[serde(default = "default_export_format")]
    pub format: String,

    /// File name used when `export` is given no path
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

fn default_export_format() -> String {
    "json".into()
}
fn default_export_file_name() -> String {
    "prompt-state.json".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_export_format(),
            file_name: default_export_file_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Refuse to print a prompt whose objective is too short (overridable
    /// per call with `--force`)
    #[serde(default = "default_true")]
    pub enforce_gate: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { enforce_gate: true }
    }
}

const STORE_BACKENDS: &[&str] = &["file", "memory"];

impl AppConfig {
    /// Load configuration from the default path (~/.promptsmith/config.toml).
    ///
    /// Environment overrides:
    /// - `PROMPTSMITH_HOME` — config directory
    /// - `PROMPTSMITH_SHARE_URL` — share link base URL
    /// - `PROMPTSMITH_STORE` — store backend
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(url) = std::env::var("PROMPTSMITH_SHARE_URL") {
            config.share.base_url = Some(url);
        }

        if let Ok(backend) = std::env::var("PROMPTSMITH_STORE") {
            config.store.backend = backend;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        match std::env::var("PROMPTSMITH_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs_home().join(".promptsmith"),
        }
    }

    /// Where the file store keeps the session.
    pub fn store_path(&self) -> PathBuf {
        match &self.store.path {
            Some(p) => PathBuf::from(p),
            None => Self::config_dir().join("session.json"),
        }
    }

    /// The configured export format (JSON if unrecognised).
    pub fn export_format(&self) -> DocumentFormat {
        DocumentFormat::from_name(&self.export.format).unwrap_or_default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !STORE_BACKENDS.contains(&self.store.backend.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "store.backend must be one of {}, got '{}'",
                STORE_BACKENDS.join(", "),
                self.store.backend
            )));
        }

        if DocumentFormat::from_name(&self.export.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "export.format must be json or toml, got '{}'",
                self.export.format
            )));
        }

        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "export.file_name must not be empty".into(),
            ));
        }

        if let Some(url) = &self.share.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "share.base_url must be an http(s) URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
