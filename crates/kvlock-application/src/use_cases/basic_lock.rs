//! Non-reentrant distributed lock
//!
//! Two acquisition/release protocols are supported on top of the
//! [`StoreGateway`] port:
//!
//! | Protocol | Acquire | Release | Expiry |
//! |----------|---------|---------|--------|
//! | [`LockProtocol::Scripted`] | [`BasicLock::try_lock`] | [`BasicLock::unlock`] (atomic) | store-native TTL |
//! | [`LockProtocol::GetSet`] | [`BasicLock::try_lock_getset`] | [`BasicLock::unlock_getset`] (read then delete) | embedded in the value |
//!
//! Acquisition spins: one attempt per poll interval until it succeeds or the
//! acquire timeout elapses. A store failure counts as a failed attempt.
//! Nothing here returns an error; a missing lock is `None`, a release that
//! removed nothing is `false`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kvlock_domain::ports::{LockProvider, StoreGateway};
use kvlock_domain::value_objects::{
    LockOptions, LockProtocol, LockSettings, LockToken, SelfDescribingToken,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Non-reentrant lock over a [`StoreGateway`]
///
/// # Example
///
/// ```ignore
/// use kvlock_application::BasicLock;
/// use kvlock_domain::LockOptions;
///
/// let lock = BasicLock::new(store);
/// let options = LockOptions::new().with_hold_millis(2000).with_acquire_timeout_millis(5000);
/// if let Some(token) = lock.try_lock("job:42", options).await {
///     // critical section
///     lock.unlock("job:42", &token).await;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BasicLock {
    store: Arc<dyn StoreGateway>,
    settings: LockSettings,
    protocol: LockProtocol,
}

impl BasicLock {
    /// Create a lock with default settings and the scripted protocol
    pub fn new(store: Arc<dyn StoreGateway>) -> Self {
        Self {
            store,
            settings: LockSettings::default(),
            protocol: LockProtocol::default(),
        }
    }

    /// Replace the settings
    pub fn with_settings(mut self, settings: LockSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Select the protocol used through [`LockProvider`]
    pub fn with_protocol(mut self, protocol: LockProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Current settings
    pub fn settings(&self) -> &LockSettings {
        &self.settings
    }

    /// Underlying store gateway
    pub fn store(&self) -> &Arc<dyn StoreGateway> {
        &self.store
    }

    /// Acquire `key` with the scripted protocol
    ///
    /// Every attempt is one atomic set-if-absent-with-TTL call carrying the
    /// same freshly generated token.
    pub async fn try_lock(&self, key: &str, options: LockOptions) -> Option<LockToken> {
        if is_blank(key) {
            warn!("Refusing to lock a blank key");
            return None;
        }

        let hold = self.settings.hold_duration(&options);
        let timeout = self.settings.acquire_timeout(&options);
        let token = LockToken::generate();
        let started = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            match self
                .store
                .set_if_absent_with_ttl(key, token.as_str(), hold)
                .await
            {
                Ok(true) => {
                    info!(key, token = %token, attempts, "Lock acquired");
                    return Some(token);
                }
                Ok(false) => debug!(key, attempts, "Lock held elsewhere, waiting"),
                Err(e) => warn!(key, attempts, error = %e, "Lock attempt failed"),
            }

            if !self.wait_for_next_attempt(started, timeout).await {
                break;
            }
        }

        info!(
            key,
            attempts,
            elapsed_ms = elapsed_ms(started),
            "Lock not acquired before timeout"
        );
        None
    }

    /// Release a lock acquired with [`try_lock`](Self::try_lock)
    ///
    /// Deletes `key` in one server-side step only if it still holds `token`.
    /// A stale token (the lock expired and someone else acquired it) never
    /// removes the other party's lock.
    ///
    /// # Returns
    /// True if the key was deleted by this call
    pub async fn unlock(&self, key: &str, token: &LockToken) -> bool {
        if is_blank(key) || token.is_blank() {
            return false;
        }

        match self.store.compare_and_delete(key, token.as_str()).await {
            Ok(true) => {
                debug!(key, token = %token, "Lock released");
                true
            }
            Ok(false) => {
                debug!(
                    key,
                    token = %token,
                    "Lock already released or held by another owner"
                );
                false
            }
            Err(e) => {
                warn!(key, token = %token, error = %e, "Lock release failed");
                false
            }
        }
    }

    /// Acquire `key` with the get/set protocol
    ///
    /// The stored value is a [`SelfDescribingToken`] and the key carries no
    /// store-side TTL. When the key is held, the embedded expiry is checked;
    /// an expired lock is taken over with GETSET, and ownership is granted
    /// only if the value swapped out is exactly the one read just before.
    /// Values that cannot be parsed are treated as still held.
    #[doc(alias = "try_lock2")]
    pub async fn try_lock_getset(&self, key: &str, options: LockOptions) -> Option<LockToken> {
        if is_blank(key) {
            warn!("Refusing to lock a blank key");
            return None;
        }

        let hold = self.settings.hold_duration(&options);
        let timeout = self.settings.acquire_timeout(&options);
        let id = LockToken::generate().into_inner();
        let started = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let candidate = SelfDescribingToken::expiring_after(id.as_str(), hold);
            match self.store.set_if_absent(key, &candidate.encode()).await {
                Ok(true) => {
                    let token = candidate.to_token();
                    info!(key, token = %token, attempts, "Lock acquired");
                    return Some(token);
                }
                Ok(false) => {
                    if let Some(token) = self.take_over_expired(key, hold).await {
                        return Some(token);
                    }
                }
                Err(e) => warn!(key, attempts, error = %e, "Lock attempt failed"),
            }

            if !self.wait_for_next_attempt(started, timeout).await {
                break;
            }
        }

        info!(
            key,
            attempts,
            elapsed_ms = elapsed_ms(started),
            "Lock not acquired before timeout"
        );
        None
    }

    /// Release a lock acquired with [`try_lock_getset`](Self::try_lock_getset)
    ///
    /// Reads the value and deletes the key if it equals `token`, as two
    /// separate store calls. This is weaker than [`unlock`](Self::unlock):
    /// if the lock expires and is taken over by another client between the
    /// read and the delete, this call deletes the other client's lock.
    /// Prefer the scripted protocol where the store supports scripting.
    ///
    /// # Returns
    /// True if the key was deleted by this call
    #[doc(alias = "unlock2")]
    pub async fn unlock_getset(&self, key: &str, token: &LockToken) -> bool {
        if is_blank(key) || token.is_blank() {
            return false;
        }

        let current = match self.store.get(key).await {
            Ok(current) => current,
            Err(e) => {
                warn!(key, token = %token, error = %e, "Lock release failed");
                return false;
            }
        };

        if current.as_deref() != Some(token.as_str()) {
            debug!(
                key,
                token = %token,
                "Lock already released or held by another owner"
            );
            return false;
        }

        // Not atomic with the read above.
        match self.store.delete(key).await {
            Ok(deleted) => {
                debug!(key, token = %token, deleted, "Lock released");
                deleted
            }
            Err(e) => {
                warn!(key, token = %token, error = %e, "Lock release failed");
                false
            }
        }
    }

    /// Try to replace an expired self-describing value
    async fn take_over_expired(&self, key: &str, hold: Duration) -> Option<LockToken> {
        let observed = match self.store.get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read lock value");
                return None;
            }
        };

        let Some(current) = SelfDescribingToken::parse(&observed) else {
            debug!(key, value = %observed, "Unparseable lock value, assuming held");
            return None;
        };
        if !current.is_expired() {
            return None;
        }

        let replacement = SelfDescribingToken::generate(hold);
        match self.store.get_and_set(key, &replacement.encode()).await {
            Ok(previous) if previous.as_deref() == Some(observed.as_str()) => {
                let token = replacement.to_token();
                info!(
                    key,
                    token = %token,
                    expired = %observed,
                    "Expired lock taken over"
                );
                Some(token)
            }
            Ok(previous) => {
                debug!(
                    key,
                    expected = %observed,
                    previous = ?previous,
                    "Lock changed hands during takeover"
                );
                None
            }
            Err(e) => {
                warn!(key, error = %e, "Lock takeover failed");
                None
            }
        }
    }

    /// Sleep until the next attempt; false once the timeout has elapsed
    async fn wait_for_next_attempt(&self, started: Instant, timeout: Duration) -> bool {
        let Some(remaining) = timeout.checked_sub(started.elapsed()) else {
            return false;
        };
        if remaining.is_zero() {
            return false;
        }
        tokio::time::sleep(self.settings.poll_interval.min(remaining)).await;
        true
    }
}

#[async_trait]
impl LockProvider for BasicLock {
    async fn try_lock(&self, key: &str, options: LockOptions) -> Option<LockToken> {
        match self.protocol {
            LockProtocol::Scripted => BasicLock::try_lock(self, key, options).await,
            LockProtocol::GetSet => self.try_lock_getset(key, options).await,
        }
    }

    async fn unlock(&self, key: &str, token: &LockToken) -> bool {
        match self.protocol {
            LockProtocol::Scripted => BasicLock::unlock(self, key, token).await,
            LockProtocol::GetSet => self.unlock_getset(key, token).await,
        }
    }

    fn protocol(&self) -> LockProtocol {
        self.protocol
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
