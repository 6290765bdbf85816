use crate::cache::errors::BackendError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use std::sync::Arc;

/// Constructor resolved from a [`CacheClient`](crate::cache::enums::cache_client::CacheClient).
pub type BackendFactory = fn(&CacheConfig) -> Result<Arc<dyn CacheBackend>, BackendError>;
