use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{StorageError, StorageResult};
use super::record_store::CollectionKey;
use super::traits::BlobBackend;

/// Blob backend that keeps one `<key>.json` file per key in a data directory.
///
/// The quota covers the marketplace collection files only; anything else in
/// the directory is left alone and not counted.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    base_directory: PathBuf,
    quota_bytes: Option<usize>,
}

impl JsonFileBackend {
    /// Open a backend rooted at `base_directory`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> StorageResult<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            quota_bytes: None,
        })
    }

    /// Limit the total size of the collection files
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding `key`. Characters outside `[A-Za-z0-9_-]` are
    /// replaced so a key can never escape the data directory.
    pub fn file_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.base_directory.join(format!("{}.json", safe))
    }

    fn used_bytes_excluding(&self, excluded: &Path) -> StorageResult<usize> {
        let mut total = 0usize;
        for key in CollectionKey::ALL {
            let path = self.file_path(key.as_str());
            if path == excluded {
                continue;
            }
            match fs::metadata(&path) {
                Ok(metadata) => total += key.as_str().len() + metadata.len() as usize,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(total)
    }
}

impl BlobBackend for JsonFileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No file for '{}' at {}", key, path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.file_path(key);

        if let Some(limit) = self.quota_bytes {
            let required = self.used_bytes_excluding(&path)? + key.len() + value.len();
            if required > limit {
                warn!("Quota exceeded writing '{}': {} > {} bytes", key, required, limit);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    limit,
                });
            }
        }

        // Atomic write using temp file
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved '{}' to {}", key, path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
