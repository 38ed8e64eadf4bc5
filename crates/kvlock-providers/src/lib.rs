//! # kvlock - Store Gateway Implementations
//!
//! Each store implements the [`StoreGateway`] port defined in
//! `kvlock-domain` and registers itself into the store provider registry of
//! `kvlock-application` at link time.
//!
//! | Provider | Feature | Description |
//! |----------|---------|-------------|
//! | `RedisStoreGateway` | `store-redis` | Redis, Lua scripts for the conditional operations |
//! | `InMemoryStoreGateway` | `store-memory` | Process-local map with deadlines |
//! | [`NullStoreGateway`](store::NullStoreGateway) | always | Stores nothing |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! kvlock-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

pub use kvlock_domain::error::{Error, Result};
pub use kvlock_domain::ports::providers::StoreGateway;

/// Provider-specific constants
pub mod constants;

/// Store gateway implementations
pub mod store;
