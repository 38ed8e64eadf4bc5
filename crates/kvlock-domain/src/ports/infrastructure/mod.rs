//! Infrastructure ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`LockProvider`] | Distributed lock coordination |

pub mod lock;

pub use lock::LockProvider;
