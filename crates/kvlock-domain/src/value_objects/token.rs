//! Lock token value objects
//!
//! A [`LockToken`] is the opaque proof of ownership handed out by a
//! successful acquisition. The get/set protocol stores a
//! [`SelfDescribingToken`] instead, which carries its own expiry so that the
//! client can decide whether a held lock may be taken over.

use crate::constants::TOKEN_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Proof of ownership for an acquired lock
///
/// Compared byte for byte against the value stored under the lock key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockToken(String);

impl LockToken {
    /// Wrap an existing token value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh plain token (random v4 UUID)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Token value as stored in the key-value store
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Consume the token and return the raw value
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LockToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for LockToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LockToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Token encoding `<random-id>_<absolute-expiry-epoch-millis>`
///
/// # Example
///
/// ```
/// use kvlock_domain::value_objects::SelfDescribingToken;
///
/// let token = SelfDescribingToken::new("abc", 1_700_000_000_000);
/// assert_eq!(token.encode(), "abc_1700000000000");
/// assert_eq!(SelfDescribingToken::parse("abc_1700000000000"), Some(token));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfDescribingToken {
    id: String,
    expires_at_ms: i64,
}

impl SelfDescribingToken {
    /// Build a token from an id and an absolute expiry
    pub fn new(id: impl Into<String>, expires_at_ms: i64) -> Self {
        Self {
            id: id.into(),
            expires_at_ms,
        }
    }

    /// Generate a token with a fresh random id expiring `hold` from now
    pub fn generate(hold: Duration) -> Self {
        Self::expiring_after(Uuid::new_v4().to_string(), hold)
    }

    /// Build a token for `id` expiring `hold` from now
    pub fn expiring_after(id: impl Into<String>, hold: Duration) -> Self {
        let hold_ms = i64::try_from(hold.as_millis()).unwrap_or(i64::MAX);
        Self::new(id, now_epoch_millis().saturating_add(hold_ms))
    }

    /// Parse a stored value
    ///
    /// Returns `None` when the value has no separator, an empty id or an
    /// expiry that is not a valid integer.
    pub fn parse(value: &str) -> Option<Self> {
        let (id, expiry) = value.rsplit_once(TOKEN_SEPARATOR)?;
        if id.is_empty() {
            return None;
        }
        let expires_at_ms = expiry.trim().parse::<i64>().ok()?;
        Some(Self::new(id, expires_at_ms))
    }

    /// Encode as the value written to the store
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.id, TOKEN_SEPARATOR, self.expires_at_ms)
    }

    /// Random id part
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Absolute expiry in epoch milliseconds
    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at_ms
    }

    /// Whether the embedded expiry lies strictly before `now_ms`
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }

    /// Whether the embedded expiry has passed according to the local clock
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_epoch_millis())
    }

    /// Encoded form as a [`LockToken`]
    pub fn to_token(&self) -> LockToken {
        LockToken(self.encode())
    }
}

impl fmt::Display for SelfDescribingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
