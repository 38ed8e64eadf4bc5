//! Bootstrap
//!
//! Wires configuration to a running lock stack:
//!
//! ```text
//! AppConfig → StoreConfig → linkme registry → Arc<dyn StoreGateway>
//!           → LockConfig  → BasicLock → ReentrantLock
//! ```

use std::sync::Arc;

use kvlock_application::ports::registry::{list_store_providers, resolve_store_provider};
use kvlock_application::{BasicLock, ReentrantLock};
use kvlock_domain::error::{Error, Result};
use kvlock_domain::ports::{LockProvider, StoreGateway};
use tracing::info;

use crate::config::{AppConfig, ConfigLoader, StoreConfig};

// Link the store implementations so their registry entries are present
use kvlock_providers as _;

/// Resolves store gateways from the provider registry
#[derive(Debug, Clone)]
pub struct StoreProviderResolver {
    config: StoreConfig,
}

impl StoreProviderResolver {
    /// Create a resolver for the given store configuration
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Resolve the configured store
    pub fn resolve(&self) -> Result<Arc<dyn StoreGateway>> {
        resolve_store_provider(&self.config.to_provider_config()).map_err(Error::configuration)
    }

    /// List available store providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_store_providers()
    }
}

/// Fully wired lock stack
#[derive(Debug, Clone)]
pub struct LockContext {
    config: AppConfig,
    store: Arc<dyn StoreGateway>,
    basic: Arc<BasicLock>,
    reentrant: Arc<ReentrantLock>,
}

impl LockContext {
    /// Build the stack from an already loaded configuration
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let store = StoreProviderResolver::new(config.store.clone()).resolve()?;
        let basic = Arc::new(
            BasicLock::new(Arc::clone(&store))
                .with_settings(config.lock.to_settings())
                .with_protocol(config.lock.protocol),
        );
        let reentrant = Arc::new(ReentrantLock::new(Arc::clone(&basic)));

        info!(
            store = store.provider_name(),
            protocol = %config.lock.protocol,
            poll_interval_ms = config.lock.poll_interval_ms,
            "Lock context ready"
        );

        Ok(Self {
            config,
            store,
            basic,
            reentrant,
        })
    }

    /// Load configuration with `loader` and build the stack
    pub fn load(loader: &ConfigLoader) -> Result<Self> {
        Self::from_config(loader.load()?)
    }

    /// Configuration the stack was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Store gateway
    pub fn store(&self) -> &Arc<dyn StoreGateway> {
        &self.store
    }

    /// Non-reentrant lock
    pub fn basic_lock(&self) -> &Arc<BasicLock> {
        &self.basic
    }

    /// Reentrant lock over [`basic_lock`](Self::basic_lock)
    pub fn reentrant_lock(&self) -> &Arc<ReentrantLock> {
        &self.reentrant
    }

    /// The basic lock behind the `LockProvider` port, using the configured protocol
    pub fn lock_provider(&self) -> Arc<dyn LockProvider> {
        self.basic.clone()
    }
}
