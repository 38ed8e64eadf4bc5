//! Provider ports
//!
//! Contracts implemented by the `kvlock-providers` crate.

pub mod store;

pub use store::StoreGateway;
