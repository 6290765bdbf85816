use thiserror::Error;

/// Failure reported by a backend adapter itself, as opposed to a cache-level
/// outcome such as a miss.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Cache miss: {key}")]
    CacheMiss { key: String },

    #[error("Stale entry: {key} is {age}ms old")]
    StaleEntry { key: String, age: u64 },

    #[error("Corrupt entry: {key}: {reason}")]
    CorruptEntry { key: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CacheError {
    /// True when the lookup found nothing usable and the caller should
    /// recompute and `set` again.
    pub fn is_no_usable_value(&self) -> bool {
        matches!(
            self,
            CacheError::CacheMiss { .. } | CacheError::StaleEntry { .. } | CacheError::CorruptEntry { .. }
        )
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, CacheError::Backend(_))
    }
}
