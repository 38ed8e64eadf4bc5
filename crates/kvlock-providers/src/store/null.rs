//! Null store gateway for testing
//!
//! Stores nothing. Every conditional write reports failure and every read
//! is absent, so a lock over this store is never acquired.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kvlock_domain::error::Result;
use kvlock_domain::ports::providers::StoreGateway;

use crate::constants::STORE_PROVIDER_NULL;

/// Null store gateway that doesn't store anything
///
/// # Example
///
/// ```rust
/// use kvlock_providers::store::NullStoreGateway;
///
/// let store = NullStoreGateway::new();
/// // Every acquisition attempt against this store fails
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullStoreGateway;

impl NullStoreGateway {
    /// Create a new null store gateway
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StoreGateway for NullStoreGateway {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_if_absent(&self, _key: &str, _value: &str) -> Result<bool> {
        Ok(false)
    }

    async fn set_if_absent_with_ttl(
        &self,
        _key: &str,
        _value: &str,
        _ttl: Duration,
    ) -> Result<bool> {
        Ok(false)
    }

    async fn get_and_set(&self, _key: &str, _value: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn compare_and_delete(&self, _key: &str, _expected: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        STORE_PROVIDER_NULL
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use kvlock_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry,
};

fn null_store_factory(
    _config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn StoreGateway>, String> {
    Ok(Arc::new(NullStoreGateway::new()))
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static NULL_PROVIDER: StoreProviderEntry = StoreProviderEntry {
    name: STORE_PROVIDER_NULL,
    description: "Null store (never grants a lock, for testing)",
    factory: null_store_factory,
};
