use crate::cache::enums::cache_client::CacheClient;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    pub client: CacheClient,
    pub connection_url: String,
    pub disk_path: String,
    /// Entry lifetime in milliseconds.
    pub cache_duration: u64,
    pub cache_prefix: String,
    /// Milliseconds allowed for connecting and for each health check.
    pub connect_timeout: u64,
    /// Milliseconds between Redis health checks.
    pub health_check_interval: u64,
}
