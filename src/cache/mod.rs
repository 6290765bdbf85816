//! Page cache with TTL validation and backend failover.
//!
//! Callers hand in a logical identifier (usually a request path) and an
//! optional suffix; the controller derives a backend key, wraps the payload
//! in a timestamped envelope and stores it on the active backend. Reads
//! reject entries older than `cache_duration` and remove them.
//!
//! # Supported Backends
//!
//! - **Redis**: primary store; reports lost connections out of band
//! - **Disk**: one file per key; the failover target for Redis
//! - **Memory**: in-process map, no failover
//!
//! # Architecture
//!
//! - `CacheBackend` trait defines the get/set/del contract
//! - `CacheClient` resolves to a backend factory at construction
//! - `Cache` owns exactly one active backend and swaps Redis for disk when
//!   Redis fails; the swap is one-way
//!
//! Any `get` error means "recompute and `set` again". Nothing is retried.
//!
//! # Example
//!
//! ```rust,ignore
//! use page_cache::cache::structs::cache::Cache;
//!
//! let cache = Cache::new(Arc::new(config.cache.clone()))?;
//! cache.set("/home", &serde_json::json!({"html": "<p>hi</p>"}), None).await?;
//! let entry = cache.get("/home", None).await?;
//! ```

/// Backend kind and failover state enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the controller and adapters.
pub mod impls;

/// Data structures for the controller, envelope and adapters.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;

/// Type aliases.
pub mod types;
