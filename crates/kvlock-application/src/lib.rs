//! Application Layer - kvlock
//!
//! Lock use cases built on the [`StoreGateway`](kvlock_domain::StoreGateway)
//! port.
//!
//! ## Use Cases
//!
//! - [`BasicLock`]: non-reentrant lock, scripted and get/set protocols
//! - [`ReentrantLock`]: per-context hold counting on top of [`BasicLock`]
//!
//! ## Ports
//!
//! - `ports::registry`: link-time registry of store providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `kvlock-domain`: tokens, hold records and port traits
//! - Pure Rust libraries for async, logging and concurrent maps

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
