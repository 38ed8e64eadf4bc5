//! Store Gateway Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullStoreGateway`] | Testing | Stores nothing, every conditional write fails |
//! | `InMemoryStoreGateway` | Local | Single-process locking and tests |
//! | `RedisStoreGateway` | Distributed | Redis-backed for multi-process locking |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `InMemoryStoreGateway`
//! - **Multi Process**: `RedisStoreGateway`

#[cfg(feature = "store-memory")]
pub mod memory;
pub mod null;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::InMemoryStoreGateway;
pub use null::NullStoreGateway;
#[cfg(feature = "store-redis")]
pub use redis::RedisStoreGateway;
