//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::reload::RELOAD_INTERVAL;
use crate::theme::AxisColorPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub reload: ReloadConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GraphQL endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_api_url() -> String {
    "http://localhost:3080/".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            request_timeout_secs: default_request_timeout(),
            headers: BTreeMap::new(),
        }
    }
}

/// View reload configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReloadConfig {
    #[serde(default = "default_reload_interval")]
    pub interval_ms: u64,
}

fn default_reload_interval() -> u64 {
    RELOAD_INTERVAL.as_millis() as u64
}

impl ReloadConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_reload_interval(),
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    /// Start in dark mode
    #[serde(default)]
    pub dark: bool,

    #[serde(default)]
    pub axis_policy: AxisColorPolicy,
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
    "info".to_string()
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

/// A loaded configuration and what went wrong on the way
///
/// Loading happens before logging is set up, so problems are collected here
/// for the caller to report.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Files that failed to load and rejected environment overrides
    pub warnings: Vec<ConfigError>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate(path)
    }

    fn validate(self, path: &Path) -> Result<Self, ConfigError> {
        if self.reload.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                error: "reload.interval_ms must be greater than 0".to_string(),
            });
        }

        Ok(self)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> LoadedConfig {
        let mut config = Config::default();
        let warnings = config.apply_env_overrides();
        LoadedConfig {
            config,
            source: None,
            warnings,
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<LoadedConfig, ConfigError> {
        let mut config = Self::load(path)?;
        let warnings = config.apply_env_overrides();
        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings,
        })
    }

    /// Load from default locations or environment
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("guildboard").join("config.toml")),
            Some(PathBuf::from("/etc/guildboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file that parses, else defaults
    fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(mut loaded) => {
                    failures.append(&mut loaded.warnings);
                    loaded.warnings = failures;
                    return loaded;
                }
                Err(e) => failures.push(e),
            }
        }

        let mut loaded = Self::from_env();
        failures.append(&mut loaded.warnings);
        loaded.warnings = failures;
        loaded
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Vec<ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut rejected = Vec::new();

        if let Some(url) = var("GUILDBOARD_API_URL") {
            self.api.url = url;
        }

        if let Some(interval) = var("GUILDBOARD_RELOAD_INTERVAL_MS") {
            match interval.parse::<u64>() {
                Ok(ms) if ms > 0 => self.reload.interval_ms = ms,
                _ => rejected.push(ConfigError::InvalidEnv {
                    var: "GUILDBOARD_RELOAD_INTERVAL_MS".to_string(),
                    value: interval,
                }),
            }
        }

        if let Some(dark) = var("GUILDBOARD_DARK") {
            self.theme.dark = dark.to_lowercase() != "false" && dark != "0";
        }

        if let Some(level) = var("GUILDBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("GUILDBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }

        rejected
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },

    #[error("Ignoring {var}={value:?}: expected a positive number")]
    InvalidEnv { var: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Guildboard Configuration
#
# Environment variables override these settings:
# - GUILDBOARD_API_URL
# - GUILDBOARD_RELOAD_INTERVAL_MS
# - GUILDBOARD_DARK
# - GUILDBOARD_LOG_LEVEL
# - GUILDBOARD_LOG_FORMAT

[api]
# GraphQL endpoint of the bot backend
url = "http://localhost:3080/"

# Request timeout in seconds
request_timeout_secs = 30

# Extra request headers
[api.headers]

[reload]
# How often views reload their content (ms)
interval_ms = 30000

[theme]
# Start in dark mode
dark = false

# Axis colors: "primary_then_secondary" or "uniform"
axis_policy = "primary_then_secondary"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
