//! Provider Constants
//!
//! Constants specific to store gateway implementations. Lock protocol
//! constants live in `kvlock_domain::constants`.

// ============================================================================
// REDIS STORE CONSTANTS
// ============================================================================

/// Connection URI used when the configuration does not name one
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Set-if-absent with a millisecond TTL, in one server-side step
///
/// The TTL is applied when the key was just written, or when an existing
/// key carries no expiry at all. An existing expiry is left untouched.
///
/// KEYS[1] = lock key, ARGV[1] = token, ARGV[2] = TTL in milliseconds.
/// Returns 1 if the key was written, 0 otherwise.
pub const REDIS_ACQUIRE_SCRIPT: &str = r"
local ok = redis.call('SETNX', KEYS[1], ARGV[1])
if ok == 1 or redis.call('PTTL', KEYS[1]) == -1 then
    redis.call('PEXPIRE', KEYS[1], ARGV[2])
end
return ok
";

/// Delete the key only if it still holds the expected token
///
/// KEYS[1] = lock key, ARGV[1] = expected token.
/// Returns the number of deleted keys.
pub const REDIS_RELEASE_SCRIPT: &str = r"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    return redis.call('DEL', KEYS[1])
end
return 0
";

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Registry name of the Redis store
pub const STORE_PROVIDER_REDIS: &str = "redis";

/// Registry name of the in-memory store
pub const STORE_PROVIDER_MEMORY: &str = "memory";

/// Registry name of the null store
pub const STORE_PROVIDER_NULL: &str = "null";
