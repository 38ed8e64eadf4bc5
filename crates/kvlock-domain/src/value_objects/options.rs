//! Lock acquisition options and settings

use crate::constants::{DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Per-call options for an acquisition
///
/// Unset or zero durations fall back to the defaults of the lock's
/// [`LockSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockOptions {
    /// Maximum time the lock may be held before it expires
    pub hold_duration: Option<Duration>,
    /// Maximum time to wait for the lock
    pub acquire_timeout: Option<Duration>,
}

impl LockOptions {
    /// Options using the lock's defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hold duration
    pub fn with_hold_duration(mut self, hold_duration: Duration) -> Self {
        self.hold_duration = Some(hold_duration);
        self
    }

    /// Set the hold duration in milliseconds
    pub fn with_hold_millis(self, millis: u64) -> Self {
        self.with_hold_duration(Duration::from_millis(millis))
    }

    /// Set the acquire timeout
    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = Some(acquire_timeout);
        self
    }

    /// Set the acquire timeout in milliseconds
    pub fn with_acquire_timeout_millis(self, millis: u64) -> Self {
        self.with_acquire_timeout(Duration::from_millis(millis))
    }

    /// Hold duration after applying the default
    pub fn effective_hold_duration(&self, default: Duration) -> Duration {
        non_zero_or(self.hold_duration, default)
    }

    /// Acquire timeout after applying the default
    pub fn effective_acquire_timeout(&self, default: Duration) -> Duration {
        non_zero_or(self.acquire_timeout, default)
    }
}

fn non_zero_or(value: Option<Duration>, default: Duration) -> Duration {
    match value {
        Some(duration) if !duration.is_zero() => duration,
        _ => default,
    }
}

/// Instance-wide lock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockSettings {
    /// Hold duration used when a call does not specify one
    pub default_hold_duration: Duration,
    /// Acquire timeout used when a call does not specify one
    pub default_acquire_timeout: Duration,
    /// Sleep between two acquisition attempts
    pub poll_interval: Duration,
}

impl Default for LockSettings {
    fn default() -> Self {
        Self {
            default_hold_duration: Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS),
            default_acquire_timeout: Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl LockSettings {
    /// Set the default hold duration (zero keeps the built-in default)
    pub fn with_default_hold_duration(mut self, duration: Duration) -> Self {
        self.default_hold_duration =
            non_zero_or(Some(duration), Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS));
        self
    }

    /// Set the default acquire timeout (zero keeps the built-in default)
    pub fn with_default_acquire_timeout(mut self, duration: Duration) -> Self {
        self.default_acquire_timeout =
            non_zero_or(Some(duration), Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS));
        self
    }

    /// Set the poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Resolve the hold duration for a call
    pub fn hold_duration(&self, options: &LockOptions) -> Duration {
        options.effective_hold_duration(self.default_hold_duration)
    }

    /// Resolve the acquire timeout for a call
    pub fn acquire_timeout(&self, options: &LockOptions) -> Duration {
        options.effective_acquire_timeout(self.default_acquire_timeout)
    }
}

/// Acquisition/release protocol
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockProtocol {
    /// Server-side script, plain token, store-native TTL, atomic release
    #[default]
    Scripted,
    /// SETNX + GETSET with a self-describing token, non-atomic release
    GetSet,
}

impl LockProtocol {
    /// Canonical name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scripted => "scripted",
            Self::GetSet => "get_set",
        }
    }
}

impl fmt::Display for LockProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LockProtocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "scripted" | "script" | "lua" => Ok(Self::Scripted),
            "get_set" | "getset" => Ok(Self::GetSet),
            other => Err(Error::invalid_argument(format!(
                "Unknown lock protocol '{other}'. Use scripted or get_set"
            ))),
        }
    }
}
