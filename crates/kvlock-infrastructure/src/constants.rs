//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Lock protocol constants are defined in `kvlock_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "kvlock.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "kvlock";

/// Environment variable prefix for configuration
///
/// Variables are read as `KVLOCK__<SECTION>__<KEY>`.
pub const CONFIG_ENV_PREFIX: &str = "KVLOCK";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Store provider used when the configuration does not name one
pub const DEFAULT_STORE_PROVIDER: &str = "redis";

/// Store URI used when the configuration does not name one
pub const DEFAULT_STORE_URI: &str = "redis://127.0.0.1:6379";

/// URI schemes accepted by the Redis store
pub const REDIS_URI_SCHEMES: [&str; 2] = ["redis://", "rediss://"];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "KVLOCK_LOG";

/// File name stem for rolling log files when the path has none
pub const LOG_FILE_STEM: &str = "kvlock";
