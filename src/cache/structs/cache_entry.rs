use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CacheEntry {
    pub path: String,
    pub content: serde_json::Value,
    pub created: u64,
}
