use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::AppError;
use crate::language_utils;
use crate::providers::{libretranslate, mymemory};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code, `auto` to let the provider detect it
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Remote translation services
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// History persistence settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Endpoint of a single translation service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EndpointConfig {
    // @field: Service URL
    pub endpoint: String,
}

/// Primary and fallback translation services
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvidersConfig {
    /// Service asked first (LibreTranslate API)
    #[serde(default = "default_primary_endpoint")]
    pub primary: EndpointConfig,

    /// Service asked when the primary fails (MyMemory API)
    #[serde(default = "default_fallback_endpoint")]
    pub fallback: EndpointConfig,

    /// Request timeout in seconds; unset leaves requests unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary: default_primary_endpoint(),
            fallback: default_fallback_endpoint(),
            timeout_secs: None,
        }
    }
}

/// History persistence settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HistoryConfig {
    /// SQLite database holding the history; defaults to the user data directory
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Matching filter for the `log` facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    language_utils::AUTO_DETECT.to_string()
}

fn default_target_language() -> String {
    "hi".to_string()
}

fn default_primary_endpoint() -> EndpointConfig {
    EndpointConfig {
        endpoint: libretranslate::DEFAULT_ENDPOINT.to_string(),
    }
}

fn default_fallback_endpoint() -> EndpointConfig {
    EndpointConfig {
        endpoint: mymemory::DEFAULT_ENDPOINT.to_string(),
    }
}

impl Config {
    /// Load the configuration from `path`, writing the defaults there first
    /// when the file does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values.
    ///
    /// Every problem is reported as `AppError::Config`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source_language.trim().is_empty() {
            return Err(AppError::Config("Source language must not be empty".to_string()));
        }

        if self.target_language.trim().is_empty() {
            return Err(AppError::Config("Target language must not be empty".to_string()));
        }

        if language_utils::is_auto_detect(&self.target_language) {
            return Err(AppError::Config(format!(
                "Target language cannot be '{}'",
                language_utils::AUTO_DETECT
            )));
        }

        for (role, endpoint) in [
            ("primary", &self.providers.primary.endpoint),
            ("fallback", &self.providers.fallback.endpoint),
        ] {
            Url::parse(endpoint).map_err(|e| {
                AppError::Config(format!("Invalid {} endpoint '{}': {}", role, endpoint, e))
            })?;
        }

        if self.providers.timeout_secs == Some(0) {
            return Err(AppError::Config("Timeout must be at least one second when set".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            providers: ProvidersConfig::default(),
            history: HistoryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
