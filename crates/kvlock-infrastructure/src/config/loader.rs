//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, LockConfig, LoggingConfig, StoreConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use kvlock_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `KVLOCK__STORE__URI`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (e.g., KVLOCK__LOCK__POLL_INTERVAL_MS)
        let prefix = format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails on the first invalid section.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(&config.logging)?;
    validate_store_config(&config.store)?;
    validate_lock_config(&config.lock)?;
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    parse_log_level(&config.level).map(|_| ())
}

fn validate_store_config(config: &StoreConfig) -> Result<()> {
    let provider = config.provider.trim();
    if provider.is_empty() {
        return Err(Error::configuration("Store provider cannot be empty"));
    }
    if provider == "redis" {
        let uri = config.uri.as_deref().unwrap_or_default();
        if !REDIS_URI_SCHEMES
            .iter()
            .any(|scheme| uri.starts_with(scheme))
        {
            return Err(Error::configuration(format!(
                "Redis store URI must start with redis:// or rediss://, got '{}'",
                uri
            )));
        }
    }
    Ok(())
}

fn validate_lock_config(config: &LockConfig) -> Result<()> {
    if config.poll_interval_ms == 0 {
        return Err(Error::configuration("Lock poll interval cannot be 0"));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set store configuration
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Set lock configuration
    pub fn with_lock(mut self, lock: LockConfig) -> Self {
        self.config.lock = lock;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
