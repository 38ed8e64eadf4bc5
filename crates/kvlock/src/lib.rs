//! # kvlock
//!
//! Distributed mutual exclusion over a shared key-value store. Independent
//! processes coordinate on a resource named by a key; locks expire after a
//! bounded hold time and acquisition gives up after a bounded wait.
//!
//! ## Example
//!
//! ```ignore
//! use kvlock::{ConfigLoader, LockContext, LockOptions};
//!
//! let context = LockContext::load(&ConfigLoader::new())?;
//! let lock = context.basic_lock();
//! let options = LockOptions::new().with_hold_millis(2000).with_acquire_timeout_millis(5000);
//! if let Some(token) = lock.try_lock("job:42", options).await {
//!     // critical section
//!     lock.unlock("job:42", &token).await;
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Tokens, options, hold records and ports
//! - `application` - Basic and reentrant lock use cases, provider registry
//! - `providers` - Redis, in-memory and null store gateways
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `cli` - The `kvlock` command line

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use kvlock_domain::*;
}

/// Application layer - lock use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use kvlock_application::*;
}

/// Store gateway implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use kvlock_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use kvlock_infrastructure::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use domain::*;

pub use application::{BasicLock, ReentrantLock};
pub use infrastructure::{AppConfig, ConfigLoader, LockContext};
