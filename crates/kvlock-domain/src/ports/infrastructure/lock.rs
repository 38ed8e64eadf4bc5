//! Distributed Lock Provider Port
//!
//! Defines the contract for distributed lock coordination services.

use crate::value_objects::{LockOptions, LockProtocol, LockToken};
use async_trait::async_trait;

/// Distributed lock provider interface
///
/// Neither method fails: a lock that could not be obtained is `None`, a
/// release that removed nothing is `false`.
#[async_trait]
pub trait LockProvider: Send + Sync {
    /// Acquire a distributed lock, waiting at most the acquire timeout
    async fn try_lock(&self, key: &str, options: LockOptions) -> Option<LockToken>;

    /// Release a distributed lock previously acquired with `token`
    async fn unlock(&self, key: &str, token: &LockToken) -> bool;

    /// Protocol used by this provider
    fn protocol(&self) -> LockProtocol;
}
