//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, environment) |
//! | [`bootstrap`] | Configuration to store to lock wiring |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`utils`] | Timing helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use bootstrap::{LockContext, StoreProviderResolver};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
