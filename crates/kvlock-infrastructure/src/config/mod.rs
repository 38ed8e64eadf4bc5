//! Configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | `AppConfig` and its sections |
//! | [`loader`] | Figment loader, validation and TOML persistence |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
