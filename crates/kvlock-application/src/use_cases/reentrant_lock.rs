//! Reentrant distributed lock
//!
//! Tracks one [`HoldRecord`] per execution context. Only the first
//! acquisition and the final release of a context reach the store; nested
//! calls adjust the hold count locally.
//!
//! ```text
//! NO_RECORD --try_lock--> HELD(1) --try_lock--> HELD(2) ...
//!     ^                      |
//!     +-------unlock---------+
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use kvlock_domain::entities::HoldRecord;
use kvlock_domain::value_objects::{ContextId, LockOptions, LockToken};
use tracing::{debug, warn};

use super::basic_lock::BasicLock;

/// Reentrant lock keyed by [`ContextId`]
///
/// A context holds at most one record at a time. Acquiring again from a
/// context that already holds a lock returns the held token, even when a
/// different key is requested.
#[derive(Debug)]
pub struct ReentrantLock {
    inner: Arc<BasicLock>,
    holds: DashMap<ContextId, HoldRecord>,
}

impl ReentrantLock {
    /// Wrap a basic lock
    pub fn new(inner: Arc<BasicLock>) -> Self {
        Self {
            inner,
            holds: DashMap::new(),
        }
    }

    /// The wrapped basic lock
    pub fn basic(&self) -> &Arc<BasicLock> {
        &self.inner
    }

    /// Acquire `key` for `ctx`, or re-enter the lock `ctx` already holds
    pub async fn try_lock(
        &self,
        ctx: &ContextId,
        key: &str,
        options: LockOptions,
    ) -> Option<LockToken> {
        if let Some(token) = self.reenter(ctx, key) {
            return Some(token);
        }

        let token = self.inner.try_lock(key, options).await?;
        self.holds
            .insert(ctx.clone(), HoldRecord::acquired(key, token.clone()));
        debug!(context = %ctx, key, "Hold record created");
        Some(token)
    }

    /// Release one level of the lock held by `ctx`
    ///
    /// # Returns
    /// True only when this call performed the store release and it removed
    /// the key. Nested releases return false.
    pub async fn unlock(&self, ctx: &ContextId, key: &str, token: &LockToken) -> bool {
        if key.trim().is_empty() || token.is_blank() {
            return false;
        }

        let remaining = match self.holds.get_mut(ctx) {
            Some(mut guard) => guard.value_mut().exit(),
            None => {
                debug!(context = %ctx, key, "No hold record, nothing to release");
                return false;
            }
        };

        if remaining > 0 {
            debug!(context = %ctx, key, remaining, "Nested release");
            return false;
        }

        self.holds.remove_if(ctx, |_, record| record.hold_count() == 0);
        self.inner.unlock(key, token).await
    }

    /// Nesting depth of `ctx`, zero without a record
    pub fn hold_count(&self, ctx: &ContextId) -> u32 {
        self.holds
            .get(ctx)
            .map(|guard| guard.value().hold_count())
            .unwrap_or(0)
    }

    /// Token currently held by `ctx`
    pub fn held_token(&self, ctx: &ContextId) -> Option<LockToken> {
        self.holds.get(ctx).map(|guard| guard.value().token().clone())
    }

    fn reenter(&self, ctx: &ContextId, key: &str) -> Option<LockToken> {
        let mut guard = self.holds.get_mut(ctx)?;
        let record = guard.value_mut();
        if !record.is_held() {
            return None;
        }
        if record.key() != key {
            warn!(
                context = %ctx,
                held_key = record.key(),
                requested_key = key,
                "Context already holds a lock on another key, re-entering it"
            );
        }
        let hold_count = record.enter();
        debug!(context = %ctx, key, hold_count, "Lock re-entered");
        Some(record.token().clone())
    }
}
