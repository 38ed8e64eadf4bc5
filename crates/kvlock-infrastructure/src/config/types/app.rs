//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LockConfig, LoggingConfig, StoreConfig};

/// Root configuration
///
/// ```toml
/// [logging]
/// level = "info"
///
/// [store]
/// provider = "redis"
/// uri = "redis://127.0.0.1:6379"
///
/// [lock]
/// default_hold_ms = 10000
/// default_acquire_timeout_ms = 10000
/// poll_interval_ms = 100
/// protocol = "scripted"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Store backend selection
    #[serde(default)]
    pub store: StoreConfig,

    /// Lock defaults
    #[serde(default)]
    pub lock: LockConfig,
}
