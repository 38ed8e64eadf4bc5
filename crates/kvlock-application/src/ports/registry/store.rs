//! Store Provider Registry
//!
//! Auto-registration system for store gateway providers.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime by iterating [`STORE_PROVIDERS`].

use std::sync::Arc;

use kvlock_domain::ports::providers::StoreGateway;

/// Configuration for store provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StoreProviderConfig {
    /// Provider name (e.g., "redis", "memory", "null")
    pub provider: String,
    /// Connection URI (for networked stores)
    pub uri: Option<String>,
}

impl StoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// Registry entry for store providers
///
/// Each store provider implementation registers one entry containing
/// metadata and a factory function.
pub struct StoreProviderEntry {
    /// Unique provider name (e.g., "redis", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&StoreProviderConfig) -> Result<Arc<dyn StoreGateway>, String>,
}

// Providers submit entries at link time
#[linkme::distributed_slice]
pub static STORE_PROVIDERS: [StoreProviderEntry] = [..];

/// Resolve store provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn StoreGateway>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_store_provider(
    config: &StoreProviderConfig,
) -> Result<Arc<dyn StoreGateway>, String> {
    let provider_name = config.provider.trim();

    for entry in STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown store provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered store providers
///
/// Returns (name, description) tuples, sorted by name.
pub fn list_store_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect();
    providers.sort_by_key(|(name, _)| *name);
    providers
}
