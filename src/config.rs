//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::display::{DisplayOptions, DEFAULT_DATE_FORMAT};
use crate::endpoint;
use crate::unit::ViewMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub devserver: DevServerConfig,
}

/// Where the REST API lives
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Explicit base URL, wins over everything else
    #[serde(default)]
    pub base_url: Option<String>,

    /// GitHub Codespace name; the API is then reached through the
    /// forwarded port 8000
    #[serde(default)]
    pub codespace_name: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Config pointing straight at a base URL
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Resolved base URL without a trailing slash
    pub fn base_url(&self) -> String {
        endpoint::resolve_base_url(self.base_url.as_deref(), self.codespace_name.as_deref())
    }

    /// Full URL of a collection endpoint such as `/api/teams/`
    pub fn endpoint_url(&self, path: &str) -> String {
        endpoint::join(&self.base_url(), path)
    }
}

/// Rendering defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub view: ViewMode,

    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            date_format: default_date_format(),
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            date_format: self.date_format.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Fixture server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DevServerConfig {
    #[serde(default = "default_devserver_host")]
    pub host: String,

    #[serde(default = "default_devserver_port")]
    pub port: u16,

    /// Wrap collections in a `{"count", "next", "previous", "results"}` page
    #[serde(default)]
    pub envelope: bool,
}

fn default_devserver_host() -> String {
    "127.0.0.1".to_string()
}

fn default_devserver_port() -> u16 {
    8000
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: default_devserver_host(),
            port: default_devserver_port(),
            envelope: false,
        }
    }
}

impl DevServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("./octofit.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Load an explicitly named file, or fall back to the default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("OCTOFIT_API_URL") {
            self.api.base_url = Some(url);
        }
        if let Some(name) = var("OCTOFIT_CODESPACE_NAME").or_else(|| var("CODESPACE_NAME")) {
            self.api.codespace_name = Some(name);
        }

        // Display overrides
        if let Some(view) = var("OCTOFIT_VIEW") {
            match view.parse() {
                Ok(v) => self.display.view = v,
                Err(e) => tracing::warn!("Ignoring OCTOFIT_VIEW: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }

        // Fixture server overrides
        if let Some(port) = var("OCTOFIT_DEVSERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.devserver.port = p;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - OCTOFIT_CODESPACE_NAME (or CODESPACE_NAME)
# - OCTOFIT_VIEW
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT
# - OCTOFIT_DEVSERVER_PORT

[api]
# Base URL of the REST API. When unset, a codespace name builds
# https://<name>-8000.app.github.dev, otherwise http://localhost:8000 is used.
# base_url = "http://localhost:8000"

# GitHub Codespace hosting the API
# codespace_name = "my-codespace"

# Request timeout in seconds (no timeout when unset)
# request_timeout_secs = 30

[display]
# Initial layout: table or cards
view = "table"

# strftime pattern for dates
date_format = "%-m/%-d/%Y"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

[devserver]
# Fixture API server address
host = "127.0.0.1"
port = 8000

# Serve collections inside a paginated {"results": [...]} envelope
envelope = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_codespace_base_url() {
        let api = ApiConfig {
            codespace_name: Some("fuzzy-disco".into()),
            ..Default::default()
        };
        assert_eq!(api.base_url(), "https://fuzzy-disco-8000.app.github.dev");
        assert_eq!(
            api.endpoint_url("/api/users/"),
            "https://fuzzy-disco-8000.app.github.dev/api/users/"
        );
    }

    #[test]
    fn test_explicit_base_url_wins_and_is_trimmed() {
        let api = ApiConfig {
            base_url: Some("http://10.0.0.5:8000/".into()),
            codespace_name: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(api.endpoint_url("/api/teams/"), "http://10.0.0.5:8000/api/teams/");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.display.view, ViewMode::Table);
        assert_eq!(config.display.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.devserver.port, 8000);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://api.internal"

[display]
view = "cards"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url(), "http://api.internal");
        assert_eq!(config.display.view, ViewMode::Cards);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/octofit.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nview = \"grid\"").unwrap();
        let bad = Config::load(file.path()).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("CODESPACE_NAME", "shiny-space"),
            ("OCTOFIT_VIEW", "cards"),
            ("OCTOFIT_LOG_FORMAT", "json"),
            ("OCTOFIT_DEVSERVER_PORT", "9100"),
        ]));

        assert_eq!(config.api.base_url(), "https://shiny-space-8000.app.github.dev");
        assert_eq!(config.display.view, ViewMode::Cards);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.devserver.addr(), "127.0.0.1:9100");
    }

    #[test]
    fn test_bad_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("OCTOFIT_VIEW", "grid"),
            ("OCTOFIT_DEVSERVER_PORT", "not-a-port"),
        ]));

        assert_eq!(config.display.view, ViewMode::Table);
        assert_eq!(config.devserver.port, 8000);
    }
}
