//! Cache data structures.

/// The cache controller handle.
pub mod cache;

/// The `{path, content, created}` envelope persisted in a backend.
pub mod cache_entry;

/// Prefix + hash + suffix key derivation.
pub mod key_deriver;

/// Redis-backed adapter with a liveness watchdog.
pub mod cache_connector_redis;

/// Filesystem-backed adapter, also used as the failover target.
pub mod cache_connector_disk;

/// In-process map adapter.
pub mod cache_connector_memory;
