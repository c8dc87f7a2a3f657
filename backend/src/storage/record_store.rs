//! Whole-collection JSON persistence on top of a [`BlobBackend`].
//!
//! Every collection lives under one fixed key as a JSON array; the session is
//! stored as a single JSON object. Reads of a missing key produce an empty
//! collection. Writes replace the whole collection, so callers that need
//! read-modify-write semantics should go through [`RecordStore::append`],
//! which serialises concurrent appends made through clones of the same store.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex};

use super::error::{StorageError, StorageResult};
use super::traits::BlobBackend;

/// The fixed keys the marketplace persists under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Users,
    Pets,
    AuthSession,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 3] = [
        CollectionKey::Users,
        CollectionKey::Pets,
        CollectionKey::AuthSession,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKey::Users => "petconnect_users",
            CollectionKey::Pets => "petconnect_pets",
            CollectionKey::AuthSession => "petconnect_auth",
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed collection store shared by the repositories
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn BlobBackend>,
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    pub fn new<B: BlobBackend + 'static>(backend: B) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    pub fn from_shared(backend: Arc<dyn BlobBackend>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read a whole collection. A missing key is an empty collection.
    pub fn read<T: DeserializeOwned>(&self, key: CollectionKey) -> StorageResult<Vec<T>> {
        Ok(self.read_record(key)?.unwrap_or_default())
    }

    /// Replace a whole collection
    pub fn write<T: Serialize>(&self, key: CollectionKey, records: &[T]) -> StorageResult<()> {
        debug!("Writing {} records to {}", records.len(), key);
        self.write_record(key, records)
    }

    /// Append one record, holding the store-wide write lock across the
    /// read-modify-write
    pub fn append<T: Serialize + DeserializeOwned>(
        &self,
        key: CollectionKey,
        record: &T,
    ) -> StorageResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut records: Vec<serde_json::Value> = self.read(key)?;
        let value = serde_json::to_value(record).map_err(|source| StorageError::Serialization {
            key: key.to_string(),
            source,
        })?;
        records.push(value);
        self.write(key, &records)
    }

    /// Write `records` only if the collection is missing or empty, under the
    /// same lock as [`RecordStore::append`]. Returns whether anything was
    /// written.
    pub fn write_if_empty<T: Serialize>(
        &self,
        key: CollectionKey,
        records: &[T],
    ) -> StorageResult<bool> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let existing: Vec<serde_json::Value> = self.read(key)?;
        if !existing.is_empty() {
            return Ok(false);
        }
        self.write(key, records)?;
        Ok(true)
    }

    /// Read a single JSON document stored under `key`
    pub fn read_record<T: DeserializeOwned>(&self, key: CollectionKey) -> StorageResult<Option<T>> {
        match self.backend.get(key.as_str())? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Serialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Write a single JSON document under `key`
    pub fn write_record<T: Serialize + ?Sized>(
        &self,
        key: CollectionKey,
        record: &T,
    ) -> StorageResult<()> {
        let raw = serde_json::to_string(record).map_err(|source| StorageError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.backend.put(key.as_str(), raw)
    }

    /// Remove every marketplace key from the backend
    pub fn clear(&self) -> StorageResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        for key in CollectionKey::ALL {
            self.backend.remove(key.as_str())?;
        }
        Ok(())
    }
}
