//! Store configuration types

use crate::constants::{DEFAULT_STORE_PROVIDER, DEFAULT_STORE_URI};
use kvlock_application::ports::registry::StoreProviderConfig;
use serde::{Deserialize, Serialize};

/// Store backend selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered provider name ("redis", "memory", "null")
    pub provider: String,

    /// Connection URI, used by networked stores
    pub uri: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            uri: Some(DEFAULT_STORE_URI.to_string()),
        }
    }
}

impl StoreConfig {
    /// Configuration for the in-memory store
    pub fn memory() -> Self {
        Self {
            provider: "memory".to_string(),
            uri: None,
        }
    }

    /// Configuration for a Redis store at `uri`
    pub fn redis(uri: impl Into<String>) -> Self {
        Self {
            provider: "redis".to_string(),
            uri: Some(uri.into()),
        }
    }

    /// Registry lookup configuration
    pub fn to_provider_config(&self) -> StoreProviderConfig {
        let config = StoreProviderConfig::new(self.provider.trim());
        match &self.uri {
            Some(uri) => config.with_uri(uri.clone()),
            None => config,
        }
    }
}
