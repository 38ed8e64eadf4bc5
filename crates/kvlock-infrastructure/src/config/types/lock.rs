//! Lock configuration types

use kvlock_domain::constants::{DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS};
use kvlock_domain::value_objects::{LockProtocol, LockSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lock defaults applied when a call does not specify its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// Hold duration in milliseconds
    pub default_hold_ms: u64,

    /// Acquire timeout in milliseconds
    pub default_acquire_timeout_ms: u64,

    /// Sleep between acquisition attempts in milliseconds
    pub poll_interval_ms: u64,

    /// Protocol used through the `LockProvider` port
    pub protocol: LockProtocol,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            default_hold_ms: DEFAULT_LOCK_TIMEOUT_MS,
            default_acquire_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            protocol: LockProtocol::default(),
        }
    }
}

impl LockConfig {
    /// Settings for a `BasicLock`
    pub fn to_settings(&self) -> LockSettings {
        LockSettings::default()
            .with_default_hold_duration(Duration::from_millis(self.default_hold_ms))
            .with_default_acquire_timeout(Duration::from_millis(self.default_acquire_timeout_ms))
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
    }
}
