//! Store Gateway Port
//!
//! Key-value store primitives the lock protocols are built on. Every
//! method is a single atomic unit on the store side.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Store Gateway Port
///
/// Defines the contract for key-value store backends. Implementations must
/// execute each method atomically with respect to other clients of the same
/// store.
///
/// # Implementations
///
/// - **Redis**: Lua scripts for the conditional operations
/// - **InMemory**: Process-local map for single-process use and tests
/// - **Null**: Stores nothing, every conditional write fails
///
/// # Example
///
/// ```ignore
/// use kvlock_domain::ports::providers::StoreGateway;
/// use std::time::Duration;
///
/// if store.set_if_absent_with_ttl("job:42", "token", Duration::from_secs(2)).await? {
///     // key now holds "token" and expires in two seconds
/// }
/// ```
#[async_trait]
pub trait StoreGateway: Send + Sync + std::fmt::Debug {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// The value if present, None if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value` only if the key is absent, without expiry
    ///
    /// # Returns
    /// True if the value was written
    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool>;

    /// Set `key` to `value` only if the key is absent, with a TTL
    ///
    /// The TTL is applied in the same atomic unit as the presence check.
    /// When the key already exists but carries no expiry, the TTL is applied
    /// to it as well so that no key is ever left without one.
    /// An existing expiry is left untouched, unlike a script that re-arms
    /// the TTL on every call: contended attempts never extend the holder's
    /// lock.
    ///
    /// # Returns
    /// True if the value was written
    async fn set_if_absent_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool>;

    /// Unconditionally replace the value under `key`
    ///
    /// # Returns
    /// The previous value, None if the key was absent
    async fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// Delete `key` only if its current value equals `expected`
    ///
    /// # Returns
    /// True if the key was deleted
    async fn compare_and_delete(&self, key: &str, expected: &str) -> Result<bool>;

    /// Delete `key` unconditionally
    ///
    /// # Returns
    /// True if the key existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "redis", "memory", "null")
    fn provider_name(&self) -> &str;
}
