use crate::cache::enums::cache_client::CacheClient;
use crate::cache::structs::cache_connector_disk::CacheConnectorDisk;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::types::BackendFactory;
use std::fmt;

impl fmt::Display for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheClient::redis => write!(f, "redis"),
            CacheClient::disk => write!(f, "disk"),
            CacheClient::memory => write!(f, "memory"),
        }
    }
}

impl CacheClient {
    /// Only the remote store demotes to disk when it reports a failure.
    pub fn has_fallback(&self) -> bool {
        matches!(self, CacheClient::redis)
    }

    pub fn factory(&self) -> BackendFactory {
        match self {
            CacheClient::redis => CacheConnectorRedis::build,
            CacheClient::disk => CacheConnectorDisk::build,
            CacheClient::memory => CacheConnectorMemory::build,
        }
    }

    pub fn fallback_factory() -> BackendFactory {
        CacheClient::disk.factory()
    }
}
