// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a user-edited
//! `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[server]` - Content server address and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set the `CMS_ADMIN_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use cms_admin::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("content server: {}", config.server.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Content server settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the content server; API paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for a single request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Content server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "configuration unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"zh-CN\"\ntheme_mode = \"light\"\n\n\
             [server]\nbase_url = \"https://cms.example.org\"\nrequest_timeout_secs = 12\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("zh-CN".to_string()),
                    theme_mode: ThemeMode::Light,
                },
                server: ServerConfig {
                    base_url: "https://cms.example.org".to_string(),
                    request_timeout_secs: 12,
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not valid toml = [").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.server.base_url, DEFAULT_SERVER_URL);
        assert_eq!(
            config.server.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("en-US"));
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn request_timeout_is_clamped() {
        let mut server = ServerConfig::default();
        server.request_timeout_secs = 0;
        assert_eq!(
            server.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        server.request_timeout_secs = 100_000;
        assert_eq!(
            server.request_timeout(),
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn load_with_override_reads_the_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        fs::write(
            base.join(CONFIG_FILE),
            "[server]\nbase_url = \"http://10.0.0.2:8080\"\n",
        )
        .expect("write");

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded.server.base_url, "http://10.0.0.2:8080");
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[server\nbase_url = ").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
