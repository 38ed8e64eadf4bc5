//! Redis store gateway
//!
//! Shared store for locking across processes and hosts.
//!
//! ## Commands
//!
//! | Operation | Redis |
//! |-----------|-------|
//! | `get` | `GET` |
//! | `set_if_absent` | `SETNX` |
//! | `set_if_absent_with_ttl` | Lua: `SETNX` + `PTTL` + `PEXPIRE` |
//! | `get_and_set` | `GETSET` |
//! | `compare_and_delete` | Lua: `GET` + `DEL` |
//! | `delete` | `DEL` |
//!
//! ## Example
//!
//! ```ignore
//! use kvlock_providers::store::RedisStoreGateway;
//!
//! let store = RedisStoreGateway::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisStoreGateway::with_host_port("localhost", 6379)?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kvlock_domain::error::{Error, Result};
use kvlock_domain::ports::providers::StoreGateway;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, Script};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::constants::{
    REDIS_ACQUIRE_SCRIPT, REDIS_DEFAULT_URI, REDIS_RELEASE_SCRIPT, STORE_PROVIDER_REDIS,
};

/// Redis store gateway
///
/// The connection is opened on first use and shared by all clones; the
/// connection manager reconnects on its own after a failure.
#[derive(Clone)]
pub struct RedisStoreGateway {
    client: Client,
    server: String,
    connection: Arc<OnceCell<ConnectionManager>>,
    acquire_script: Script,
    release_script: Script,
}

impl RedisStoreGateway {
    /// Create a new Redis store gateway with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::infrastructure_with_source(format!("Failed to create Redis client: {}", e), e)
        })?;

        Ok(Self {
            client,
            server: redact_credentials(connection_string),
            connection: Arc::new(OnceCell::new()),
            acquire_script: Script::new(REDIS_ACQUIRE_SCRIPT),
            release_script: Script::new(REDIS_RELEASE_SCRIPT),
        })
    }

    /// Create a new Redis store gateway with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    async fn get_connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                debug!(server = %self.server, "Opening Redis connection");
                ConnectionManager::new(self.client.clone()).await
            })
            .await
            .map_err(|e| {
                Error::store_with_source(format!("Failed to get Redis connection: {}", e), e)
            })?;
        Ok(manager.clone())
    }

    /// Server URI with any credentials removed
    pub fn server_address(&self) -> &str {
        &self.server
    }
}

fn redact_credentials(uri: &str) -> String {
    match (uri.split_once("://"), uri.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://{host}"),
        _ => uri.to_string(),
    }
}

fn store_error(operation: &str, e: redis::RedisError) -> Error {
    Error::store_with_source(format!("Redis {} failed: {}", operation, e), e)
}

fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl StoreGateway for RedisStoreGateway {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| store_error("GET", e))
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        conn.set_nx::<_, _, bool>(key, value)
            .await
            .map_err(|e| store_error("SETNX", e))
    }

    async fn set_if_absent_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let written: i64 = self
            .acquire_script
            .key(key)
            .arg(value)
            .arg(ttl_millis(ttl))
            .invoke_async(&mut conn)
            .await
            .map_err(|e| store_error("acquire script", e))?;
        Ok(written == 1)
    }

    async fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        let previous: Option<String> = redis::cmd("GETSET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(|e| store_error("GETSET", e))?;
        Ok(previous)
    }

    async fn compare_and_delete(&self, key: &str, expected: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let deleted: i64 = self
            .release_script
            .key(key)
            .arg(expected)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| store_error("release script", e))?;
        Ok(deleted > 0)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.get_connection().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| store_error("DEL", e))?;
        Ok(deleted > 0)
    }

    fn provider_name(&self) -> &str {
        STORE_PROVIDER_REDIS
    }
}

impl std::fmt::Debug for RedisStoreGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStoreGateway")
            .field("server", &self.server_address())
            .field("connected", &self.connection.initialized())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use kvlock_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry,
};

/// Factory function for creating Redis store gateway instances.
fn redis_store_factory(
    config: &StoreProviderConfig,
) -> std::result::Result<Arc<dyn StoreGateway>, String> {
    let uri = config
        .uri
        .clone()
        .unwrap_or_else(|| REDIS_DEFAULT_URI.to_string());

    let store =
        RedisStoreGateway::new(&uri).map_err(|e| format!("Failed to create Redis store: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static REDIS_PROVIDER: StoreProviderEntry = StoreProviderEntry {
    name: STORE_PROVIDER_REDIS,
    description: "Redis shared store (Lua scripts, native TTL)",
    factory: redis_store_factory,
};
