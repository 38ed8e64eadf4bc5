//! Reentrant hold bookkeeping

use crate::value_objects::LockToken;

/// Hold count and token of the lock held by one execution context
///
/// A record only exists while its count is positive; the reentrant lock
/// removes it on the release that brings the count to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldRecord {
    key: String,
    token: LockToken,
    hold_count: u32,
}

impl HoldRecord {
    /// Record for a first successful acquisition (count 1)
    pub fn acquired(key: impl Into<String>, token: LockToken) -> Self {
        Self {
            key: key.into(),
            token,
            hold_count: 1,
        }
    }

    /// Key the record was created for
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Token returned by the store-visible acquisition
    pub fn token(&self) -> &LockToken {
        &self.token
    }

    /// Current nesting depth
    pub fn hold_count(&self) -> u32 {
        self.hold_count
    }

    /// Whether the record still represents a held lock
    pub fn is_held(&self) -> bool {
        self.hold_count > 0 && !self.token.is_blank()
    }

    /// Nested acquisition, returns the new count
    pub fn enter(&mut self) -> u32 {
        self.hold_count = self.hold_count.saturating_add(1);
        self.hold_count
    }

    /// Nested release, returns the new count
    pub fn exit(&mut self) -> u32 {
        self.hold_count = self.hold_count.saturating_sub(1);
        self.hold_count
    }
}
