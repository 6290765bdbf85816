use crate::cache::errors::BackendError;
use crate::cache::structs::cache_connector_redis::{CacheConnectorRedis, RedisLink};
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::OnceCell;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::timeout;

impl CacheConnectorRedis {
    /// Never blocks on the network. An unparsable URL, a failed connect or a
    /// failed health check is delivered on the error-event channel instead.
    pub fn new(config: &CacheConfig) -> Result<CacheConnectorRedis, BackendError> {
        let runtime = Handle::try_current()
            .map_err(|e| BackendError::Connection(format!("Redis adapter needs a Tokio runtime: {}", e)))?;
        let (sender, receiver) = mpsc::unbounded_channel();
        let client = match redis::Client::open(config.connection_url.as_str()) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("[Redis] Invalid connection URL: {}", e);
                let _ = sender.send(BackendError::Redis(e));
                None
            }
        };
        let link = Arc::new(RedisLink {
            client,
            connection: OnceCell::new(),
            connect_timeout: Duration::from_millis(config.connect_timeout),
        });
        let watchdog = link.client.as_ref().map(|_| {
            runtime.spawn(Self::watch(
                link.clone(),
                sender,
                Duration::from_millis(config.health_check_interval),
            ))
        });
        Ok(CacheConnectorRedis {
            link,
            watchdog: Mutex::new(watchdog),
            events: Mutex::new(Some(receiver)),
        })
    }

    pub fn build(config: &CacheConfig) -> Result<Arc<dyn CacheBackend>, BackendError> {
        Ok(Arc::new(CacheConnectorRedis::new(config)?))
    }

    async fn watch(link: Arc<RedisLink>, sender: UnboundedSender<BackendError>, interval: Duration) {
        if let Err(e) = link.connection().await {
            warn!("[Redis] Unable to connect: {}", e);
            let _ = sender.send(e);
            return;
        }
        info!("[Redis] Connected");
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = link.ping().await {
                warn!("[Redis] Health check failed: {}", e);
                let _ = sender.send(e);
                return;
            }
        }
    }

    fn stop_watchdog(&self) {
        if let Some(handle) = self.watchdog.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for CacheConnectorRedis {
    fn drop(&mut self) {
        self.stop_watchdog();
    }
}

impl RedisLink {
    async fn connection(&self) -> Result<MultiplexedConnection, BackendError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| BackendError::Connection("Redis client unavailable".to_string()))?;
        let connection = self
            .connection
            .get_or_try_init(|| async {
                match timeout(self.connect_timeout, client.get_multiplexed_async_connection()).await {
                    Ok(result) => result.map_err(BackendError::Redis),
                    Err(_) => Err(BackendError::Connection(format!(
                        "Timed out connecting to Redis after {}ms",
                        self.connect_timeout.as_millis()
                    ))),
                }
            })
            .await?;
        Ok(connection.clone())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        let mut conn = self.connection().await?;
        match timeout(self.connect_timeout, redis::cmd("PING").query_async::<String>(&mut conn)).await {
            Ok(result) => result.map(|_| ()).map_err(BackendError::Redis),
            Err(_) => Err(BackendError::Connection(format!(
                "PING timed out after {}ms",
                self.connect_timeout.as_millis()
            ))),
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        let mut conn = self.link.connection().await?;
        let value = redis::cmd("GET")
            .arg(key)
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(BackendError::Redis)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        let mut conn = self.link.connection().await?;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut conn)
            .await
            .map_err(BackendError::Redis)?;
        debug!("[Redis] Set {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), BackendError> {
        let mut conn = self.link.connection().await?;
        redis::cmd("DEL")
            .arg(key)
            .query_async::<()>(&mut conn)
            .await
            .map_err(BackendError::Redis)?;
        debug!("[Redis] Deleted {}", key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), BackendError> {
        self.link.ping().await
    }

    fn take_error_events(&self) -> Option<UnboundedReceiver<BackendError>> {
        self.events.lock().take()
    }

    async fn close(&self) -> Result<(), BackendError> {
        self.stop_watchdog();
        info!("[Redis] Closed");
        Ok(())
    }
}
