//! Application ports
//!
//! Re-exports the domain ports and declares the provider registry.

pub mod registry;

pub use kvlock_domain::ports::{LockProvider, StoreGateway};
