//! Structured logging with tracing
//!
//! Installs the global subscriber: env filter, plain or JSON output on
//! stderr, and an optional daily rolling log file. Stdout is left to the
//! command line output.

use kvlock_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV};
use tracing::{Level, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// `KVLOCK_LOG` overrides the configured level with a full filter directive.
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new(LOG_FILE_STEM)),
        )
    });

    // Layer types differ between plain and JSON output
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter).with(console);
        match file_appender {
            Some(appender) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init(),
            None => registry.try_init(),
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let registry = Registry::default().with(filter).with(console);
        match file_appender {
            Some(appender) => registry
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init(),
            None => registry.try_init(),
        }
    };

    installed.map_err(|e| {
        Error::infrastructure_with_source(format!("Failed to install log subscriber: {}", e), e)
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
