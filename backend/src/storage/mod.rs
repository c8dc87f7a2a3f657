//! # Storage Module
//!
//! Handles all data persistence for the PetConnect marketplace.
//!
//! Records are kept as whole JSON collections in a string-keyed blob store,
//! mirroring how the browser build used localStorage. The blob backend can be
//! swapped (in-memory, JSON files on disk) without affecting the domain layer.
//!
//! ## Layers
//!
//! - **Blob backends** ([`MemoryBackend`], [`JsonFileBackend`]): raw get/put of
//!   strings by key, with an optional byte quota
//! - **Record store** ([`RecordStore`]): typed whole-collection reads and
//!   writes under the three fixed [`CollectionKey`]s
//! - **Repositories**: user, pet and session operations over the record store
//!
//! Repositories hold no cached state; every call re-reads the store.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod record_store;
pub mod repositories;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types that other modules need
pub use error::{StorageError, StorageResult};
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use record_store::{CollectionKey, RecordStore};
pub use repositories::{PetRepository, SessionRepository, UserRepository};
pub use traits::{BlobBackend, PetStorage, SessionStorage, UserStorage};
