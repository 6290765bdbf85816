use crate::cache::errors::BackendError;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

impl CacheConnectorMemory {
    pub fn new() -> CacheConnectorMemory {
        CacheConnectorMemory::default()
    }

    pub fn build(_config: &CacheConfig) -> Result<Arc<dyn CacheBackend>, BackendError> {
        Ok(Arc::new(CacheConnectorMemory::new()))
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.entries.write().insert(key.to_string(), value.to_vec());
        debug!("[Memory] Set {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), BackendError> {
        self.entries.write().remove(key);
        debug!("[Memory] Deleted {}", key);
        Ok(())
    }
}
