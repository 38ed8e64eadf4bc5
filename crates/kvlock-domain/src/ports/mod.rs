//! Domain ports (interfaces)
//!
//! - `providers`: backends selected through configuration ([`StoreGateway`])
//! - `infrastructure`: services offered to callers ([`LockProvider`])

pub mod infrastructure;
pub mod providers;

pub use infrastructure::LockProvider;
pub use providers::StoreGateway;
