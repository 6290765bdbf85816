use crate::cache::errors::BackendError;
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

/// A key-value store the cache controller can sit on.
///
/// Failures are reported as `Err`, a missing key as `Ok(None)`; the two must
/// never be conflated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError>;

    /// Removing a key that does not exist succeeds.
    async fn del(&self, key: &str) -> Result<(), BackendError>;

    async fn ping(&self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Out-of-band error channel (lost connection and the like). Only
    /// adapters that can fail outside of a call offer one, and it can be
    /// taken once.
    fn take_error_events(&self) -> Option<UnboundedReceiver<BackendError>> {
        None
    }

    async fn close(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
