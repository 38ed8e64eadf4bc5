//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for store providers.
//! Uses the `linkme` crate for link-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(STORE_...)]  │
//! │                        static ENTRY: StoreProviderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static STORE_PROVIDERS: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Resolver queries:  STORE_PROVIDERS.iter()                   │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = redis" → RedisStoreGateway   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in kvlock-providers)
//!
//! ```ignore
//! use kvlock_application::ports::registry::{StoreProviderEntry, STORE_PROVIDERS};
//!
//! #[linkme::distributed_slice(STORE_PROVIDERS)]
//! static MEMORY_PROVIDER: StoreProviderEntry = StoreProviderEntry {
//!     name: "memory",
//!     description: "Process-local in-memory store",
//!     factory: |_config| Ok(Arc::new(InMemoryStoreGateway::new())),
//! };
//! ```
//!
//! ### Resolving a Provider (in kvlock-infrastructure)
//!
//! ```ignore
//! use kvlock_application::ports::registry::{resolve_store_provider, StoreProviderConfig};
//!
//! let store = resolve_store_provider(&StoreProviderConfig::new("memory"))?;
//! ```

pub mod store;

pub use store::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry, list_store_providers,
    resolve_store_provider,
};
