//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userdir.toml` in the working directory
//! 4. `~/.config/userdir/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub log: LogConfig,
}

/// Directory API connection settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token attached to every request.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout. A zero value falls back to the default.
    pub fn timeout(&self) -> Duration {
        let secs = if self.timeout_secs == 0 {
            constants::DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout_secs
        };
        Duration::from_secs(secs)
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Embedded report settings for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub report_url: String,
    pub report_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            report_url: "about:blank".to_string(),
            report_title: "Analyst report".to_string(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// An `EnvFilter` directive, e.g. `warn` or `userdir=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then the local config in `working_dir`,
    /// then applies environment variable overrides.
    pub fn load(working_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        if let Some(dir) = working_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; only non-default values in `other` win.
    fn merge(&mut self, other: Config) {
        let default_api = ApiConfig::default();
        if other.api.base_url != default_api.base_url {
            self.api.base_url = other.api.base_url;
        }
        if other.api.token.is_some() {
            self.api.token = other.api.token;
        }
        if other.api.timeout_secs != default_api.timeout_secs && other.api.timeout_secs > 0 {
            self.api.timeout_secs = other.api.timeout_secs;
        }

        let default_dashboard = DashboardConfig::default();
        if other.dashboard.report_url != default_dashboard.report_url {
            self.dashboard.report_url = other.dashboard.report_url;
        }
        if other.dashboard.report_title != default_dashboard.report_title {
            self.dashboard.report_title = other.dashboard.report_title;
        }

        if other.log.level != LogConfig::default().level {
            self.log.level = other.log.level;
        }
    }

    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.var(constants::ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(val) = env.var(constants::ENV_TOKEN) {
            self.api.token = Some(val);
        }
        if let Some(val) = env.var(constants::ENV_TIMEOUT) {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_TIMEOUT),
            }
        }
        if let Some(val) = env.var(constants::ENV_REPORT_URL) {
            self.dashboard.report_url = val;
        }
        if let Some(val) = env.var(constants::ENV_LOG) {
            self.log.level = val;
        }
    }
}
