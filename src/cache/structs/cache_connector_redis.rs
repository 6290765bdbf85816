use crate::cache::errors::BackendError;
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct CacheConnectorRedis {
    pub(crate) link: Arc<RedisLink>,
    pub(crate) watchdog: Mutex<Option<JoinHandle<()>>>,
    pub(crate) events: Mutex<Option<UnboundedReceiver<BackendError>>>,
}

/// Shared between the adapter and its watchdog task.
#[derive(Debug)]
pub(crate) struct RedisLink {
    pub(crate) client: Option<redis::Client>,
    pub(crate) connection: OnceCell<MultiplexedConnection>,
    pub(crate) connect_timeout: Duration,
}
