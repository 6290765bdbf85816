use crate::cache::errors::BackendError;
use crate::cache::structs::cache_connector_disk::CacheConnectorDisk;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use async_trait::async_trait;
use log::debug;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;

/// Characters that are unsafe in a file name on common filesystems. `.` is
/// included so entry files never carry an extension and cannot clash with
/// temp files.
const FILE_NAME_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'\\')
    .add(b'%')
    .add(b'.')
    .add(b':')
    .add(b'*')
    .add(b'?')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'|');

static TEMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

impl CacheConnectorDisk {
    /// Longest encoded key accepted, leaving room under the usual 255 byte
    /// limit for the `.<pid>.<seq>.tmp` extension.
    pub const MAX_FILE_NAME_LEN: usize = 200;

    pub fn new(config: &CacheConfig) -> CacheConnectorDisk {
        CacheConnectorDisk::with_root(&config.disk_path)
    }

    pub fn with_root<P: AsRef<Path>>(root: P) -> CacheConnectorDisk {
        CacheConnectorDisk { root: root.as_ref().to_path_buf() }
    }

    pub fn build(config: &CacheConfig) -> Result<Arc<dyn CacheBackend>, BackendError> {
        Ok(Arc::new(CacheConnectorDisk::new(config)))
    }

    /// Percent-encodes the key so prefixes such as `site:` or `../` stay
    /// inside the cache directory.
    pub fn file_name(key: &str) -> String {
        utf8_percent_encode(key, FILE_NAME_UNSAFE).to_string()
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(Self::file_name(key))
    }

    fn checked_entry_path(&self, key: &str) -> Result<PathBuf, BackendError> {
        let file_name = Self::file_name(key);
        if file_name.len() > Self::MAX_FILE_NAME_LEN {
            return Err(BackendError::Io(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "encoded key is {} bytes, longer than {}: {}",
                    file_name.len(),
                    Self::MAX_FILE_NAME_LEN,
                    key
                ),
            )));
        }
        Ok(self.root.join(file_name))
    }

    /// Unique per process and per write, so concurrent writers never share
    /// a half-written file.
    pub(crate) fn temp_path(path: &Path) -> PathBuf {
        path.with_extension(format!(
            "{}.{}.tmp",
            std::process::id(),
            TEMP_SEQUENCE.fetch_add(1, Ordering::Relaxed)
        ))
    }

    async fn write_atomic(temp_path: &Path, path: &Path, value: &[u8]) -> std::io::Result<()> {
        fs::write(temp_path, value).await?;
        fs::rename(temp_path, path).await
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorDisk {
    fn name(&self) -> &'static str {
        "disk"
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        match fs::read(self.checked_entry_path(key)?).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BackendError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        let path = self.checked_entry_path(key)?;
        fs::create_dir_all(&self.root).await?;
        let temp_path = Self::temp_path(&path);
        if let Err(e) = Self::write_atomic(&temp_path, &path, value).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(BackendError::Io(e));
        }
        debug!("[Disk] Set {} ({} bytes)", key, value.len());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), BackendError> {
        match fs::remove_file(self.checked_entry_path(key)?).await {
            Ok(()) => {
                debug!("[Disk] Deleted {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BackendError::Io(e)),
        }
    }

    async fn ping(&self) -> Result<(), BackendError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }
}
