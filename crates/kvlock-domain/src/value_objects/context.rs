//! Execution context identity

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies the execution context that owns a reentrant hold
///
/// Tokio tasks can move between threads, so the owner is named explicitly
/// instead of being derived from the current thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(String);

impl ContextId {
    /// Fresh random context id
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Context id with a caller-chosen name
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContextId {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl From<String> for ContextId {
    fn from(value: String) -> Self {
        Self::named(value)
    }
}
