use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::{StorageError, StorageResult};
use super::traits::BlobBackend;

/// In-memory blob backend, the process-local analogue of localStorage.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    /// Create an unbounded in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory backend that rejects writes beyond `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }
}

impl BlobBackend for MemoryBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let required = others + key.len() + value.len();
            if required > limit {
                warn!("Quota exceeded writing '{}': {} > {} bytes", key, required, limit);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    limit,
                });
            }
        }

        debug!("Writing {} bytes to '{}'", value.len(), key);
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}
