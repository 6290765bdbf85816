use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct CacheConnectorMemory {
    pub(crate) entries: RwLock<HashMap<String, Vec<u8>>>,
}
