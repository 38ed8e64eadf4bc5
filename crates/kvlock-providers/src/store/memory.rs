//! In-memory store gateway
//!
//! Process-local implementation of the store primitives. Every operation
//! runs under the `DashMap` shard lock of its key, which gives the same
//! per-key atomicity a shared store offers. Expired entries read as absent
//! and are dropped lazily when touched.
//!
//! ## Example
//!
//! ```ignore
//! use kvlock_providers::store::InMemoryStoreGateway;
//!
//! let store = Arc::new(InMemoryStoreGateway::new());
//! let lock = BasicLock::new(store);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use kvlock_domain::error::Result;
use kvlock_domain::ports::providers::StoreGateway;

use crate::constants::STORE_PROVIDER_MEMORY;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn persistent(value: &str) -> Self {
        Self {
            value: value.to_string(),
            expires_at: None,
        }
    }

    fn expiring(value: &str, now: Instant, ttl: Duration) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Some(now + ttl),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

/// Process-local store gateway
#[derive(Debug, Default)]
pub struct InMemoryStoreGateway {
    entries: DashMap<String, StoredValue>,
}

impl InMemoryStoreGateway {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Whether no live entry exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining time to live of `key`, None if absent or persistent
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let entry = self.entries.get(key)?;
        if entry.is_expired(now) {
            return None;
        }
        entry.expires_at.map(|deadline| deadline - now)
    }
}

#[async_trait]
impl StoreGateway for InMemoryStoreGateway {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        }
        Ok(None)
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(StoredValue::persistent(value));
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredValue::persistent(value));
                Ok(true)
            }
        }
    }

    async fn set_if_absent_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(StoredValue::expiring(value, now, ttl));
                    return Ok(true);
                }
                let current = occupied.get_mut();
                if current.expires_at.is_none() {
                    current.expires_at = Some(now + ttl);
                }
                Ok(false)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredValue::expiring(value, now, ttl));
                Ok(true)
            }
        }
    }

    async fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let previous = occupied.insert(StoredValue::persistent(value));
                Ok((!previous.is_expired(now)).then_some(previous.value))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredValue::persistent(value));
                Ok(None)
            }
        }
    }

    async fn compare_and_delete(&self, key: &str, expected: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove_if(key, |_, entry| {
                !entry.is_expired(now) && entry.value == expected
            })
            .is_some())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !entry.is_expired(now)))
    }

    fn provider_name(&self) -> &str {
        STORE_PROVIDER_MEMORY
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use kvlock_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry,
};

/// Factory function for creating in-memory store instances.
fn memory_store_factory(
    _config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn StoreGateway>, String> {
    Ok(Arc::new(InMemoryStoreGateway::new()))
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static MEMORY_PROVIDER: StoreProviderEntry = StoreProviderEntry {
    name: STORE_PROVIDER_MEMORY,
    description: "Process-local in-memory store (single process only)",
    factory: memory_store_factory,
};
