//! Configuration Loader Tests

use kvlock_domain::{Error, LockProtocol};
use kvlock_infrastructure::config::loader::validate_app_config;
use kvlock_infrastructure::config::{
    ConfigBuilder, ConfigLoader, LockConfig, LoggingConfig, StoreConfig,
};
use kvlock_infrastructure::constants::{DEFAULT_LOG_LEVEL, DEFAULT_STORE_PROVIDER};
use std::env;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("kvlock.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn set_env(key: &str, value: &str) {
    // SAFETY: each test uses its own variable names
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: each test uses its own variable names
    unsafe {
        env::remove_var(key);
    }
}

#[test]
fn test_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("missing.toml"))
        .with_env_prefix("KVLOCK_TEST_DEFAULTS")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.store.provider, DEFAULT_STORE_PROVIDER);
    assert_eq!(config.lock.default_hold_ms, 10_000);
    assert_eq!(config.lock.default_acquire_timeout_ms, 10_000);
    assert_eq!(config.lock.poll_interval_ms, 100);
    assert_eq!(config.lock.protocol, LockProtocol::Scripted);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[store]
provider = "memory"

[lock]
default_hold_ms = 2000
protocol = "get_set"
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KVLOCK_TEST_TOML")
        .load()
        .unwrap();

    assert_eq!(config.store.provider, "memory");
    assert_eq!(config.lock.default_hold_ms, 2000);
    assert_eq!(config.lock.default_acquire_timeout_ms, 10_000);
    assert_eq!(config.lock.protocol, LockProtocol::GetSet);
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[lock]\npoll_interval_ms = 50\n");
    set_env("KVLOCK_TEST_ENV__LOCK__POLL_INTERVAL_MS", "25");
    set_env("KVLOCK_TEST_ENV__STORE__URI", "redis://cache:6380");

    let loaded = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KVLOCK_TEST_ENV")
        .load();

    remove_env("KVLOCK_TEST_ENV__LOCK__POLL_INTERVAL_MS");
    remove_env("KVLOCK_TEST_ENV__STORE__URI");

    let config = loaded.unwrap();
    assert_eq!(config.lock.poll_interval_ms, 25);
    assert_eq!(config.store.uri.as_deref(), Some("redis://cache:6380"));
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let original = ConfigBuilder::new()
        .with_store(StoreConfig::redis("redis://cache:6379"))
        .with_lock(LockConfig {
            default_hold_ms: 1500,
            protocol: LockProtocol::GetSet,
            ..LockConfig::default()
        })
        .build();

    let loader = ConfigLoader::new().with_env_prefix("KVLOCK_TEST_SAVE");
    loader.save_to_file(&original, &path).unwrap();
    let loaded = loader.with_config_path(&path).load().unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_invalid_toml_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[lock]\npoll_interval_ms = \"often\"\n");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("KVLOCK_TEST_INVALID")
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }), "got: {err:?}");
}

#[test]
fn test_validation_rejects_zero_poll_interval() {
    let config = ConfigBuilder::new()
        .with_lock(LockConfig {
            poll_interval_ms: 0,
            ..LockConfig::default()
        })
        .build();

    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("poll interval"));
}

#[test]
fn test_validation_rejects_empty_provider() {
    let config = ConfigBuilder::new()
        .with_store(StoreConfig {
            provider: "  ".to_string(),
            uri: None,
        })
        .build();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_validation_rejects_redis_without_redis_scheme() {
    let missing = ConfigBuilder::new()
        .with_store(StoreConfig {
            provider: "redis".to_string(),
            uri: None,
        })
        .build();
    let wrong_scheme = ConfigBuilder::new()
        .with_store(StoreConfig::redis("http://localhost:6379"))
        .build();
    let tls = ConfigBuilder::new()
        .with_store(StoreConfig::redis("rediss://localhost:6380"))
        .build();

    assert!(validate_app_config(&missing).is_err());
    assert!(validate_app_config(&wrong_scheme).is_err());
    assert!(validate_app_config(&tls).is_ok());
}

#[test]
fn test_validation_rejects_unknown_log_level() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "verbose".to_string(),
            ..LoggingConfig::default()
        })
        .build();

    assert!(validate_app_config(&config).is_err());
}

#[test]
fn test_lock_config_to_settings() {
    let settings = LockConfig {
        default_hold_ms: 2000,
        default_acquire_timeout_ms: 0,
        poll_interval_ms: 20,
        protocol: LockProtocol::Scripted,
    }
    .to_settings();

    assert_eq!(settings.default_hold_duration.as_millis(), 2000);
    assert_eq!(settings.default_acquire_timeout.as_millis(), 10_000);
    assert_eq!(settings.poll_interval.as_millis(), 20);
}

#[test]
fn test_store_config_to_provider_config() {
    let provider = StoreConfig::redis("redis://localhost:6379").to_provider_config();

    assert_eq!(provider.provider, "redis");
    assert_eq!(provider.uri.as_deref(), Some("redis://localhost:6379"));
    assert_eq!(StoreConfig::memory().to_provider_config().uri, None);
}
