//! TOML Configuration File Support
//!
//! This module provides centralized configuration loading for the Studio,
//! supporting a TOML configuration file at `~/.config/kigo/studio.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (when applicable)
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # XDG Base Directory Compliance
//!
//! The configuration file follows XDG Base Directory specification:
//! - `$XDG_CONFIG_HOME/kigo/studio.toml` (typically `~/.config/kigo/studio.toml`)
//!
//! # Example Configuration
//!
//! ```toml
//! [backend]
//! api_url = "https://clipdrop-api.co/text-to-image/v1"
//! api_key = "your-key"
//! timeout_secs = 60
//!
//! [studio]
//! default_style = "realistic"
//! media_dir = "/home/me/Pictures/kigo"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::DEFAULT_API_URL;
use crate::styles::DEFAULT_STYLE_ID;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Backend section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendToml {
    /// Image API endpoint URL
    pub api_url: Option<String>,

    /// Image API key
    pub api_key: Option<String>,

    /// Generation timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// Studio section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioToml {
    /// Default art style id
    pub default_style: Option<String>,

    /// Directory for persisted image bytes
    pub media_dir: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KigoToml {
    /// Backend configuration section
    pub backend: BackendToml,

    /// Studio configuration section
    pub studio: StudioToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Centralized configuration for the Studio
///
/// This struct consolidates all configuration from multiple sources and
/// tracks where values came from. Use [`load_config`] to load configuration
/// with proper priority handling.
#[derive(Clone, Debug)]
pub struct StudioConfigFile {
    /// Image API endpoint URL
    pub api_url: String,

    /// Image API key, absent when unconfigured
    pub api_key: Option<String>,

    /// Generation timeout before falling back to the placeholder
    pub timeout: Duration,

    /// Default art style id
    pub default_style: String,

    /// Directory for persisted image bytes
    pub media_dir: PathBuf,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for StudioConfigFile {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
            default_style: DEFAULT_STYLE_ID.to_string(),
            media_dir: default_media_dir(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl StudioConfigFile {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Validate the resolved configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero timeout or an
    /// empty default style.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.default_style.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "default_style must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/kigo/studio.toml` or
/// `~/.config/kigo/studio.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kigo").join("studio.toml"))
}

/// Get the default media directory
///
/// Prefers the user's pictures directory, then the data directory, then a
/// relative fallback.
#[must_use]
pub fn default_media_dir() -> PathBuf {
    dirs::picture_dir()
        .map(|p| p.join("kigo"))
        .or_else(|| dirs::data_dir().map(|p| p.join("kigo").join("media")))
        .unwrap_or_else(|| PathBuf::from("./kigo-media"))
}

/// Load configuration from all sources with proper priority
///
/// Priority order (highest first):
/// 1. CLI arguments (not handled here - caller should apply after)
/// 2. Environment variables
/// 3. TOML configuration file
/// 4. Default values
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the resolved configuration is invalid. A missing config file is not an
/// error (defaults are used).
pub fn load_config() -> Result<StudioConfigFile, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only
///   defaults and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the resolved configuration fails validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<StudioConfigFile, ConfigError> {
    // Start with defaults
    let mut config = StudioConfigFile::default();

    // Try to load from file
    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: KigoToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    // Apply environment variables (overrides file values)
    apply_env_config(&mut config);

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut StudioConfigFile, toml: &KigoToml) {
    if let Some(ref url) = toml.backend.api_url {
        config.api_url = url.clone();
    }
    if toml.backend.api_key.is_some() {
        config.api_key = toml.backend.api_key.clone();
    }
    if let Some(secs) = toml.backend.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    if let Some(ref style) = toml.studio.default_style {
        config.default_style = style.clone();
    }
    if let Some(ref dir) = toml.studio.media_dir {
        config.media_dir = PathBuf::from(dir);
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut StudioConfigFile) {
    if let Ok(key) = std::env::var("CLIPDROP_API_KEY") {
        config.api_key = Some(key);
        config.source = ConfigSource::Env;
    }
    if let Ok(url) = std::env::var("CLIPDROP_API_URL") {
        config.api_url = url;
        config.source = ConfigSource::Env;
    }
    if let Ok(style) = std::env::var("KIGO_STYLE") {
        config.default_style = style;
        config.source = ConfigSource::Env;
    }
    if let Ok(dir) = std::env::var("KIGO_MEDIA_DIR") {
        config.media_dir = PathBuf::from(dir);
        config.source = ConfigSource::Env;
    }
    if let Ok(secs) = std::env::var("KIGO_TIMEOUT_SECS") {
        if let Ok(s) = secs.parse::<u64>() {
            config.timeout = Duration::from_secs(s);
            config.source = ConfigSource::Env;
        }
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// API key override
    pub api_key: Option<String>,

    /// API URL override
    pub api_url: Option<String>,

    /// Default style override
    pub default_style: Option<String>,

    /// Media directory override
    pub media_dir: Option<PathBuf>,

    /// Timeout override (seconds)
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key override
    #[must_use]
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set API URL override
    #[must_use]
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set default style override
    #[must_use]
    pub fn with_default_style(mut self, style: String) -> Self {
        self.default_style = Some(style);
        self
    }

    /// Set media directory override
    #[must_use]
    pub fn with_media_dir(mut self, dir: PathBuf) -> Self {
        self.media_dir = Some(dir);
        self
    }

    /// Set timeout override
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut StudioConfigFile) {
        if self.api_key.is_some()
            || self.api_url.is_some()
            || self.default_style.is_some()
            || self.media_dir.is_some()
            || self.timeout_secs.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref key) = self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(ref url) = self.api_url {
            config.api_url = url.clone();
        }
        if let Some(ref style) = self.default_style {
            config.default_style = style.clone();
        }
        if let Some(ref dir) = self.media_dir {
            config.media_dir = dir.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Clean up all environment variables used by config loading.
    /// Call this at the start of tests that need clean environment state.
    fn clear_config_env_vars() {
        std::env::remove_var("CLIPDROP_API_KEY");
        std::env::remove_var("CLIPDROP_API_URL");
        std::env::remove_var("KIGO_STYLE");
        std::env::remove_var("KIGO_MEDIA_DIR");
        std::env::remove_var("KIGO_TIMEOUT_SECS");
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = StudioConfigFile::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.default_style, "realistic");
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        // Should return Some path (depends on environment)
        if let Some(p) = path {
            assert!(p.to_string_lossy().contains("kigo"));
            assert!(p.to_string_lossy().contains("studio.toml"));
        }
    }

    #[test]
    fn test_default_media_dir_is_non_empty() {
        assert!(!default_media_dir().as_os_str().is_empty());
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        clear_config_env_vars();

        let toml_content = r#"
[backend]
api_url = "http://localhost:8080/v1"
api_key = "file-key"
timeout_secs = 30

[studio]
default_style = "anime"
media_dir = "/tmp/kigo-media"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/v1");
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.default_style, "anime");
        assert_eq!(config.media_dir, PathBuf::from("/tmp/kigo-media"));
        assert_eq!(config.source(), ConfigSource::File);
    }

    #[test]
    fn test_parse_partial_toml() {
        clear_config_env_vars();

        let toml_content = r#"
[studio]
default_style = "sketch"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.default_style, "sketch");
        // Default values should be preserved
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_file_graceful() {
        clear_config_env_vars();

        let path = PathBuf::from("/nonexistent/path/studio.toml");
        let config = load_config_from_path(Some(path)).unwrap();

        assert_eq!(config.default_style, "realistic");
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_malformed_toml_error() {
        let toml_content = r#"
[backend
timeout_secs = "not a number"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[test]
    fn test_zero_timeout_rejected() {
        clear_config_env_vars();

        let toml_content = r#"
[backend]
timeout_secs = 0
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_empty_style_rejected() {
        let mut config = StudioConfigFile::default();
        config.default_style = "  ".to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    // =========================================================================
    // Priority Ordering Tests
    // =========================================================================

    /// Test that environment variables override TOML file values.
    ///
    /// Note: may race with parallel tests that touch the same env vars; the
    /// assertions accept either the env or the file value but never the
    /// default.
    #[test]
    fn test_env_overrides_file() {
        clear_config_env_vars();

        let toml_content = r#"
[studio]
default_style = "vintage"
"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        std::env::set_var("KIGO_STYLE", "cyberpunk");
        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        clear_config_env_vars();

        assert!(
            config.default_style == "cyberpunk" || config.default_style == "vintage",
            "Expected cyberpunk or vintage, got: {}",
            config.default_style
        );
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = StudioConfigFile::default();
        config.default_style = "anime".to_string(); // Simulate env override
        config.set_source(ConfigSource::Env);

        let overrides = ConfigOverrides::new().with_default_style("sketch".to_string());
        overrides.apply(&mut config);

        assert_eq!(config.default_style, "sketch");
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    // =========================================================================
    // ConfigOverrides Tests
    // =========================================================================

    #[test]
    fn test_config_overrides_builder() {
        let overrides = ConfigOverrides::new()
            .with_api_key("cli-key".to_string())
            .with_api_url("http://localhost/v1".to_string())
            .with_default_style("cartoon".to_string())
            .with_media_dir(PathBuf::from("/tmp/m"))
            .with_timeout_secs(15);

        assert_eq!(overrides.api_key, Some("cli-key".to_string()));
        assert_eq!(overrides.api_url, Some("http://localhost/v1".to_string()));
        assert_eq!(overrides.default_style, Some("cartoon".to_string()));
        assert_eq!(overrides.media_dir, Some(PathBuf::from("/tmp/m")));
        assert_eq!(overrides.timeout_secs, Some(15));
    }

    #[test]
    fn test_config_overrides_apply() {
        let mut config = StudioConfigFile::default();

        let overrides = ConfigOverrides::new()
            .with_api_key("applied-key".to_string())
            .with_timeout_secs(5);
        overrides.apply(&mut config);

        assert_eq!(config.api_key.as_deref(), Some("applied-key"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = StudioConfigFile::default();
        let original_source = config.source();

        let overrides = ConfigOverrides::new();
        overrides.apply(&mut config);

        assert_eq!(config.source(), original_source);
    }

    // =========================================================================
    // ConfigSource Tests
    // =========================================================================

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Cli), "CLI");
        assert_eq!(format!("{}", ConfigSource::Env), "environment");
        assert_eq!(format!("{}", ConfigSource::File), "config file");
        assert_eq!(format!("{}", ConfigSource::Default), "default");
    }

    // =========================================================================
    // TOML Serialization Tests
    // =========================================================================

    #[test]
    fn test_toml_round_trip() {
        let original = KigoToml {
            backend: BackendToml {
                api_url: Some("http://custom/v1".to_string()),
                api_key: Some("k".to_string()),
                timeout_secs: Some(45),
            },
            studio: StudioToml {
                default_style: Some("oil-painting".to_string()),
                media_dir: Some("/media/kigo".to_string()),
            },
        };

        let toml_string = toml::to_string(&original).unwrap();
        let parsed: KigoToml = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.backend.api_url, Some("http://custom/v1".to_string()));
        assert_eq!(parsed.backend.timeout_secs, Some(45));
        assert_eq!(
            parsed.studio.default_style,
            Some("oil-painting".to_string())
        );
        assert_eq!(parsed.studio.media_dir, Some("/media/kigo".to_string()));
    }

    // =========================================================================
    // Error Type Tests
    // =========================================================================

    #[test]
    fn test_config_error_display() {
        let read_err = ConfigError::ReadError {
            path: PathBuf::from("/test/path"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{}", read_err);
        assert!(msg.contains("/test/path"));
        assert!(msg.contains("Failed to read"));

        let validation_err = ConfigError::ValidationError("invalid value".to_string());
        let msg = format!("{}", validation_err);
        assert!(msg.contains("invalid value"));
    }
}
