use crate::cache::enums::cache_client::CacheClient;
use crate::cache::structs::cache_connector_disk::CacheConnectorDisk;
use crate::cache::structs::key_deriver::KeyDeriver;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            client: CacheClient::redis,
            connection_url: "redis://127.0.0.1:6379".to_string(),
            disk_path: "cache".to_string(),
            cache_duration: 5 * 60 * 1000,
            cache_prefix: String::new(),
            connect_timeout: 2000,
            health_check_interval: 5000,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.cache_duration == 0 {
            return Err(ConfigurationError::ValidationError("cache.cache_duration must be greater than 0".to_string()));
        }
        if self.connect_timeout == 0 || self.health_check_interval == 0 {
            return Err(ConfigurationError::ValidationError(
                "cache.connect_timeout and cache.health_check_interval must be greater than 0".to_string(),
            ));
        }
        if self.client == CacheClient::redis
            && !(self.connection_url.starts_with("redis://") || self.connection_url.starts_with("rediss://"))
        {
            return Err(ConfigurationError::ValidationError(format!(
                "cache.connection_url must be a redis:// or rediss:// URL, got '{}'",
                self.connection_url
            )));
        }
        // Redis falls back to disk, so it needs the path as well.
        if self.client != CacheClient::memory {
            if self.disk_path.trim().is_empty() {
                return Err(ConfigurationError::ValidationError("cache.disk_path must not be empty".to_string()));
            }
            let unsuffixed_key = format!("{}{}", self.cache_prefix, "0".repeat(KeyDeriver::HASH_HEX_LEN));
            let encoded = CacheConnectorDisk::file_name(&unsuffixed_key).len();
            if encoded > CacheConnectorDisk::MAX_FILE_NAME_LEN {
                return Err(ConfigurationError::ValidationError(format!(
                    "cache.cache_prefix encodes to a {} byte file name, the disk backend allows {}",
                    encoded,
                    CacheConnectorDisk::MAX_FILE_NAME_LEN
                )));
            }
        }
        Ok(())
    }
}
