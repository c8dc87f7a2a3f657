use log::debug;
use shared::Pet;

use crate::storage::error::StorageResult;
use crate::storage::record_store::{CollectionKey, RecordStore};
use crate::storage::traits::PetStorage;

/// Repository for pet listings
#[derive(Clone)]
pub struct PetRepository {
    store: RecordStore,
}

impl PetRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Store `pets` as the whole collection if no pets exist yet. Returns
    /// `false` and leaves the collection alone otherwise.
    pub fn seed_if_empty(&self, pets: &[Pet]) -> StorageResult<bool> {
        self.store.write_if_empty(CollectionKey::Pets, pets)
    }
}

impl PetStorage for PetRepository {
    fn list_pets(&self) -> StorageResult<Vec<Pet>> {
        self.store.read(CollectionKey::Pets)
    }

    fn add_pet(&self, pet: &Pet) -> StorageResult<()> {
        debug!("Storing pet {} for owner {}", pet.id, pet.owner_id);
        self.store.append(CollectionKey::Pets, pet)
    }

    fn list_pets_by_owner(&self, owner_id: &str) -> StorageResult<Vec<Pet>> {
        Ok(self
            .list_pets()?
            .into_iter()
            .filter(|pet| pet.owner_id == owner_id)
            .collect())
    }

    fn find_pet_by_id(&self, pet_id: &str) -> StorageResult<Option<Pet>> {
        Ok(self.list_pets()?.into_iter().find(|pet| pet.id == pet_id))
    }
}
