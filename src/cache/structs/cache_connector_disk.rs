use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CacheConnectorDisk {
    pub(crate) root: PathBuf,
}
