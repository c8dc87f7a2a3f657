//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! [`BlobBackend`] is the raw string-keyed blob store (the analogue of the
//! browser's localStorage). The record-level traits describe the typed
//! operations the domain services rely on.

use shared::{AuthState, Pet, User};

use super::error::StorageResult;

/// String-keyed blob storage.
///
/// A missing key is `Ok(None)`, never an error. `put` replaces the whole value.
pub trait BlobBackend: Send + Sync {
    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Trait defining the interface for user storage operations
pub trait UserStorage: Send + Sync {
    /// List all users in registration order
    fn list_users(&self) -> StorageResult<Vec<User>>;

    /// Append a user. Email uniqueness is the caller's responsibility.
    fn add_user(&self, user: &User) -> StorageResult<()>;

    /// Find the first user whose email matches exactly
    fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;
}

/// Trait defining the interface for pet listing storage operations
pub trait PetStorage: Send + Sync {
    /// List all pets in publish order
    fn list_pets(&self) -> StorageResult<Vec<Pet>>;

    /// Append a pet
    fn add_pet(&self, pet: &Pet) -> StorageResult<()>;

    /// List pets owned by `owner_id`, preserving publish order
    fn list_pets_by_owner(&self, owner_id: &str) -> StorageResult<Vec<Pet>>;

    /// Find the first pet with the given id
    fn find_pet_by_id(&self, pet_id: &str) -> StorageResult<Option<Pet>>;
}

/// Trait defining the interface for the single active session
pub trait SessionStorage: Send + Sync {
    /// Read the session, falling back to the logged-out default
    fn get_auth_state(&self) -> StorageResult<AuthState>;

    /// Replace the session
    fn set_auth_state(&self, state: &AuthState) -> StorageResult<()>;
}
