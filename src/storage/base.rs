use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::{file_storage::FileStorage, memory_storage::MemoryStorage};
use crate::config::StorageConfig;

/// The single key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "authToken";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a JSON object of strings: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable key/value storage for client state that must survive a restart.
///
/// Reads never fail: an unreadable entry is the same as a missing one.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn is_persistent(&self) -> bool {
        // Only the in-memory backend says otherwise
        true
    }
}

/// Creates a concrete storage backend from the StorageConfig.
pub fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>, StorageError> {
    match config {
        StorageConfig::Memory => {
            info!("Using in-memory storage; the session ends with the process.");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageConfig::File { path } => {
            let storage = FileStorage::open(path)?;
            info!("Using file storage at {}", path.display());
            Ok(Arc::new(storage))
        }
    }
}
