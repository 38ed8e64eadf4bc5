//! Lock use cases

pub mod basic_lock;
pub mod reentrant_lock;

pub use basic_lock::BasicLock;
pub use reentrant_lock::ReentrantLock;
