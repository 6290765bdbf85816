use crate::cache::structs::cache_entry::CacheEntry;
use serde::Serialize;
use serde::de::DeserializeOwned;

impl CacheEntry {
    pub fn new(path: &str, content: serde_json::Value, created: u64) -> CacheEntry {
        CacheEntry {
            path: path.to_string(),
            content,
            created,
        }
    }

    /// Wraps `content` in an envelope stamped with the current time.
    pub fn stamp<T: Serialize + ?Sized>(path: &str, content: &T) -> Result<CacheEntry, serde_json::Error> {
        Ok(CacheEntry::new(path, serde_json::to_value(content)?, CacheEntry::now_millis()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn decode(data: &[u8]) -> Result<CacheEntry, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn content_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.content)
    }

    pub fn age_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.created)
    }

    /// Valid while strictly younger than `duration` milliseconds.
    pub fn is_valid_at(&self, now: u64, duration: u64) -> bool {
        self.age_at(now) < duration
    }

    pub fn now_millis() -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}
