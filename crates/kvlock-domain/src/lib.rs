//! # kvlock Domain Layer
//!
//! Core types of the distributed lock: tokens, options, the per-context hold
//! record and the ports the application layer is written against.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | `LockToken`, `SelfDescribingToken`, `LockOptions`, `ContextId` |
//! | [`entities`] | `HoldRecord` |
//! | [`ports`] | `StoreGateway`, `LockProvider` |
//! | [`error`] | Domain error type |
//! | [`constants`] | Protocol defaults |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::HoldRecord;
pub use error::{Error, Result};
pub use ports::{LockProvider, StoreGateway};
pub use value_objects::{
    ContextId, LockOptions, LockProtocol, LockSettings, LockToken, SelfDescribingToken,
};
