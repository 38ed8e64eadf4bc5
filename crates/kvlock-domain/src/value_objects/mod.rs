//! Value objects
//!
//! Immutable values passed between the lock use cases and the store port.

pub mod context;
pub mod options;
pub mod token;

pub use context::ContextId;
pub use options::{LockOptions, LockProtocol, LockSettings};
pub use token::{LockToken, SelfDescribingToken, now_epoch_millis};
