//! Test utilities providing isolated stores that clean up after themselves.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::json_file::JsonFileBackend;
use super::memory::MemoryBackend;
use super::record_store::RecordStore;

/// RAII test environment backed by a temporary data directory.
///
/// The directory is removed when the environment is dropped, even if the
/// test panics.
pub struct TestEnvironment {
    /// Kept alive until drop
    _temp_dir: TempDir,
    pub store: RecordStore,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let backend = JsonFileBackend::new(&base_path).expect("Failed to open data directory");

        TestEnvironment {
            _temp_dir: temp_dir,
            store: RecordStore::new(backend),
            base_path,
        }
    }

    /// Open a second store on the same directory, as a restarted process would
    pub fn reopen(&self) -> RecordStore {
        let backend =
            JsonFileBackend::new(&self.base_path).expect("Failed to reopen data directory");
        RecordStore::new(backend)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// A fresh unbounded in-memory store
pub fn memory_store() -> RecordStore {
    RecordStore::new(MemoryBackend::new())
}
