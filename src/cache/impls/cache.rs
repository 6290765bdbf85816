use crate::cache::enums::cache_client::CacheClient;
use crate::cache::enums::failover_state::FailoverState;
use crate::cache::errors::{BackendError, CacheError};
use crate::cache::structs::cache::{Cache, CacheInner};
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::key_deriver::KeyDeriver;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use log::{debug, error, info, warn};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

impl Cache {
    /// Builds the primary backend selected by `config.client`.
    pub fn new(config: Arc<CacheConfig>) -> Result<Cache, CacheError> {
        let factory = config.client.factory();
        let backend = factory(&config)?;
        info!("[Cache] Primary backend: {}", config.client);
        Ok(Cache::with_backend(config, backend))
    }

    /// Uses `backend` as the primary. Failover to disk is armed when the
    /// configured client has a fallback and the backend offers an error
    /// channel. The watcher runs on the current Tokio runtime; without one
    /// failover stays unarmed and the error channel is left untouched.
    pub fn with_backend(config: Arc<CacheConfig>, backend: Arc<dyn CacheBackend>) -> Cache {
        let watcher = if config.client.has_fallback() {
            match Handle::try_current() {
                Ok(runtime) => backend.take_error_events().map(|events| (runtime, events)),
                Err(_) => {
                    warn!("[Failover] No Tokio runtime, failover from {} is disabled", backend.name());
                    None
                }
            }
        } else {
            None
        };
        let cache = Cache {
            inner: Arc::new(CacheInner {
                keys: KeyDeriver::new(&config.cache_prefix),
                config,
                backend: RwLock::new(backend),
                state: RwLock::new(FailoverState::PrimaryActive),
            }),
        };
        if let Some((runtime, events)) = watcher {
            runtime.spawn(Self::watch_primary(Arc::downgrade(&cache.inner), events));
        }
        cache
    }

    pub fn key(&self, identifier: &str, suffix: Option<&str>) -> String {
        self.inner.keys.derive(identifier, suffix)
    }

    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    pub fn state(&self) -> FailoverState {
        *self.inner.state.read()
    }

    /// Snapshot of the backend currently serving requests.
    pub fn active_backend(&self) -> Arc<dyn CacheBackend> {
        self.inner.backend.read().clone()
    }

    pub async fn get(&self, identifier: &str, suffix: Option<&str>) -> Result<CacheEntry, CacheError> {
        let key = self.key(identifier, suffix);
        let backend = self.active_backend();
        let data = match backend.get(&key).await? {
            Some(data) => data,
            None => {
                debug!("[Cache] Miss {} ({})", identifier, key);
                return Err(CacheError::CacheMiss { key });
            }
        };
        let entry = match CacheEntry::decode(&data) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("[Cache] Corrupt entry {} ({}): {}", identifier, key, e);
                Self::discard(backend, key.clone()).await;
                return Err(CacheError::CorruptEntry { key, reason: e.to_string() });
            }
        };
        let now = CacheEntry::now_millis();
        if !entry.is_valid_at(now, self.inner.config.cache_duration) {
            let age = entry.age_at(now);
            debug!("[Cache] Stale {} ({}), age {}ms", identifier, key, age);
            Self::discard(backend, key.clone()).await;
            return Err(CacheError::StaleEntry { key, age });
        }
        Ok(entry)
    }

    pub async fn set<T: Serialize + ?Sized>(
        &self,
        identifier: &str,
        content: &T,
        suffix: Option<&str>,
    ) -> Result<(), CacheError> {
        let key = self.key(identifier, suffix);
        let data = CacheEntry::stamp(identifier, content)
            .and_then(|entry| entry.encode())
            .map_err(|e| CacheError::SerializationError(e.to_string()))?;
        let backend = self.active_backend();
        backend.set(&key, &data).await?;
        debug!("[Cache] Stored {} ({})", identifier, key);
        Ok(())
    }

    pub async fn clear(&self, identifier: &str, suffix: Option<&str>) -> Result<(), CacheError> {
        let key = self.key(identifier, suffix);
        let backend = self.active_backend();
        backend.del(&key).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        let backend = self.active_backend();
        backend.ping().await?;
        Ok(())
    }

    /// Best-effort removal of an unusable entry, detached from the caller
    /// when a runtime is available. Failures are only logged.
    async fn discard(backend: Arc<dyn CacheBackend>, key: String) {
        let removal = async move {
            if let Err(e) = backend.del(&key).await {
                warn!("[Cache] Unable to clear {}: {}", key, e);
            }
        };
        match Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(removal);
            }
            Err(_) => removal.await,
        }
    }

    async fn watch_primary(inner: Weak<CacheInner>, mut events: UnboundedReceiver<BackendError>) {
        let Some(reason) = events.recv().await else {
            return;
        };
        if let Some(inner) = inner.upgrade() {
            inner.fail_over(reason).await;
        }
    }
}

impl CacheInner {
    /// Replaces the primary with a fresh disk backend. One-way: nothing
    /// switches back.
    pub(crate) async fn fail_over(&self, reason: BackendError) {
        error!("[Failover] Primary backend failed: {}", reason);
        if *self.state.read() != FailoverState::PrimaryActive {
            return;
        }
        let fallback = match CacheClient::fallback_factory()(&self.config) {
            Ok(fallback) => fallback,
            Err(e) => {
                error!("[Failover] Unable to build fallback backend: {}", e);
                return;
            }
        };
        let previous = std::mem::replace(&mut *self.backend.write(), fallback);
        *self.state.write() = FailoverState::FallbackActive;
        info!("[Failover] Switched from {} to disk at {}", previous.name(), self.config.disk_path);
        if let Err(e) = previous.close().await {
            debug!("[Failover] Closing {} failed: {}", previous.name(), e);
        }
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("backend", &self.active_backend().name())
            .field("state", &self.state())
            .field("prefix", &self.inner.keys.prefix())
            .finish()
    }
}
