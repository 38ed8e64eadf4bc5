//! Unit tests for lock options, settings and protocol names

use kvlock_domain::constants::{DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS};
use kvlock_domain::{LockOptions, LockProtocol, LockSettings};
use std::time::Duration;

#[test]
fn test_default_settings() {
    let settings = LockSettings::default();
    assert_eq!(
        settings.default_hold_duration,
        Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS)
    );
    assert_eq!(
        settings.default_acquire_timeout,
        Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS)
    );
    assert_eq!(
        settings.poll_interval,
        Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
    );
}

#[test]
fn test_unset_options_use_defaults() {
    let settings = LockSettings::default();
    let options = LockOptions::new();
    assert_eq!(settings.hold_duration(&options), Duration::from_secs(10));
    assert_eq!(settings.acquire_timeout(&options), Duration::from_secs(10));
}

#[test]
fn test_zero_options_use_defaults() {
    let settings = LockSettings::default();
    let options = LockOptions::new()
        .with_hold_millis(0)
        .with_acquire_timeout_millis(0);
    assert_eq!(settings.hold_duration(&options), Duration::from_secs(10));
    assert_eq!(settings.acquire_timeout(&options), Duration::from_secs(10));
}

#[test]
fn test_explicit_options_win() {
    let settings = LockSettings::default();
    let options = LockOptions::new()
        .with_hold_millis(2000)
        .with_acquire_timeout_millis(5000);
    assert_eq!(settings.hold_duration(&options), Duration::from_millis(2000));
    assert_eq!(settings.acquire_timeout(&options), Duration::from_millis(5000));
}

#[test]
fn test_settings_ignore_zero_defaults() {
    let settings = LockSettings::default()
        .with_default_hold_duration(Duration::ZERO)
        .with_default_acquire_timeout(Duration::from_secs(3));
    assert_eq!(settings.default_hold_duration, Duration::from_secs(10));
    assert_eq!(settings.default_acquire_timeout, Duration::from_secs(3));
}

#[test]
fn test_protocol_parse() {
    assert_eq!("scripted".parse::<LockProtocol>().unwrap(), LockProtocol::Scripted);
    assert_eq!("get_set".parse::<LockProtocol>().unwrap(), LockProtocol::GetSet);
    assert_eq!("get-set".parse::<LockProtocol>().unwrap(), LockProtocol::GetSet);
    assert_eq!("GETSET".parse::<LockProtocol>().unwrap(), LockProtocol::GetSet);
    assert!("redlock".parse::<LockProtocol>().is_err());
}

#[test]
fn test_protocol_display_round_trips() {
    for protocol in [LockProtocol::Scripted, LockProtocol::GetSet] {
        assert_eq!(protocol.to_string().parse::<LockProtocol>().unwrap(), protocol);
    }
    assert_eq!(LockProtocol::default(), LockProtocol::Scripted);
}
