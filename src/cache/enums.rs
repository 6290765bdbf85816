//! Cache enumerations.

/// Backend kinds selectable as primary (redis, disk, memory).
pub mod cache_client;

/// Failover state of the cache controller.
pub mod failover_state;
