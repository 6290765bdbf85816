#![allow(dead_code)]
use async_trait::async_trait;
use page_cache::cache::enums::cache_client::CacheClient;
use page_cache::cache::enums::failover_state::FailoverState;
use page_cache::cache::errors::BackendError;
use page_cache::cache::structs::cache::Cache;
use page_cache::cache::structs::cache_connector_memory::CacheConnectorMemory;
use page_cache::cache::traits::cache_backend::CacheBackend;
use page_cache::config::structs::cache_config::CacheConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub type TestConfig = Arc<CacheConfig>;

pub fn create_test_config(client: CacheClient, dir: &TempDir, cache_duration: u64) -> TestConfig {
    Arc::new(CacheConfig {
        client,
        connection_url: "redis://127.0.0.1:1".to_string(),
        disk_path: dir.path().join("pages").to_string_lossy().to_string(),
        cache_duration,
        cache_prefix: "test:".to_string(),
        connect_timeout: 500,
        health_check_interval: 100,
    })
}

/// Stands in for a remote store: keeps entries in memory and lets the test
/// raise an out-of-band error.
pub struct FlakyBackend {
    pub store: CacheConnectorMemory,
    pub closed: AtomicBool,
    sender: UnboundedSender<BackendError>,
    events: Mutex<Option<UnboundedReceiver<BackendError>>>,
}

impl FlakyBackend {
    pub fn new() -> Arc<FlakyBackend> {
        let (sender, receiver) = mpsc::unbounded_channel();
        Arc::new(FlakyBackend {
            store: CacheConnectorMemory::new(),
            closed: AtomicBool::new(false),
            sender,
            events: Mutex::new(Some(receiver)),
        })
    }

    pub fn lose_connection(&self) {
        let _ = self.sender.send(BackendError::Connection("connection lost".to_string()));
    }

    fn check_open(&self) -> Result<(), BackendError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(BackendError::Connection("closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheBackend for FlakyBackend {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        self.check_open()?;
        self.store.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.check_open()?;
        self.store.set(key, value).await
    }

    async fn del(&self, key: &str) -> Result<(), BackendError> {
        self.check_open()?;
        self.store.del(key).await
    }

    fn take_error_events(&self) -> Option<UnboundedReceiver<BackendError>> {
        self.events.lock().take()
    }

    async fn close(&self) -> Result<(), BackendError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub async fn wait_for_fallback(cache: &Cache, limit: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if cache.state() == FailoverState::FallbackActive {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cache.state() == FailoverState::FallbackActive
}

pub async fn wait_until_absent(backend: &Arc<dyn CacheBackend>, key: &str, limit: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if matches!(backend.get(key).await, Ok(None)) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    matches!(backend.get(key).await, Ok(None))
}

/// Memory store whose deletes take `delay`.
pub struct SlowDeleteBackend {
    pub store: CacheConnectorMemory,
    pub delay: Duration,
}

impl SlowDeleteBackend {
    pub fn new(delay: Duration) -> Arc<SlowDeleteBackend> {
        Arc::new(SlowDeleteBackend { store: CacheConnectorMemory::new(), delay })
    }
}

#[async_trait]
impl CacheBackend for SlowDeleteBackend {
    fn name(&self) -> &'static str {
        "slow-delete"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        self.store.get(key).await
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.store.set(key, value).await
    }

    async fn del(&self, key: &str) -> Result<(), BackendError> {
        tokio::time::sleep(self.delay).await;
        self.store.del(key).await
    }
}
