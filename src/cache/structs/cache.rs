use crate::cache::enums::failover_state::FailoverState;
use crate::cache::structs::key_deriver::KeyDeriver;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Page cache with TTL validation and one-way failover from the primary
/// backend to disk. Clones share the same backend slot.
#[derive(Clone)]
pub struct Cache {
    pub(crate) inner: Arc<CacheInner>,
}

pub(crate) struct CacheInner {
    pub(crate) config: Arc<CacheConfig>,
    pub(crate) keys: KeyDeriver,
    pub(crate) backend: RwLock<Arc<dyn CacheBackend>>,
    pub(crate) state: RwLock<FailoverState>,
}
