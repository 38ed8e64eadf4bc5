//! Domain layer constants
//!
//! Lock protocol constants shared by the application layer. Store and
//! configuration constants live in `kvlock_infrastructure::constants`.

// ============================================================================
// LOCK PROTOCOL CONSTANTS
// ============================================================================

/// Default hold duration and acquire timeout in milliseconds (10 seconds)
///
/// Applied whenever a caller passes no duration or a zero duration.
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 10_000;

/// Interval between two acquisition attempts in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Separator between the random id and the expiry in a self-describing token
pub const TOKEN_SEPARATOR: char = '_';
