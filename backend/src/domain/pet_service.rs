use anyhow::Result;
use log::{debug, info, warn};
use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::domain::chatbot::chatbot_response;
use crate::domain::commands::pets::PublishOutcome;
use crate::domain::listing_validator::validate_listing;
use crate::domain::utils::{generate_id, now_rfc3339, timestamp_millis};
use crate::storage::traits::{PetStorage, SessionStorage};
use crate::storage::{PetRepository, RecordStore, SessionRepository};
use shared::{Gender, Pet, PetFormData, PetQuery, PetSortOrder, ValidationResult};

const INVALID_GENDER_MESSAGE: &str = "🚫 Gender must be Male or Female";

/// Number of listings shown on the home page
pub const FEATURED_PET_COUNT: usize = 3;

/// Service for browsing and publishing pet listings
#[derive(Clone)]
pub struct PetService {
    pet_repository: PetRepository,
    session_repository: SessionRepository,
}

impl PetService {
    pub fn new(store: RecordStore) -> Self {
        Self {
            pet_repository: PetRepository::new(store.clone()),
            session_repository: SessionRepository::new(store),
        }
    }

    /// Seed the sample listings when no pets exist yet. Returns how many were
    /// added; existing data is never touched.
    pub fn initialize_default_data(&self) -> Result<usize> {
        let samples = sample_pets(&now_rfc3339());
        if !self.pet_repository.seed_if_empty(&samples)? {
            debug!("Pets already present, skipping sample data");
            return Ok(0);
        }
        info!("Seeded {} sample pets", samples.len());
        Ok(samples.len())
    }

    /// All listings in publish order
    pub fn get_pets(&self) -> Result<Vec<Pet>> {
        Ok(self.pet_repository.list_pets()?)
    }

    pub fn save_pet(&self, pet: &Pet) -> Result<()> {
        self.pet_repository.add_pet(pet)?;
        info!("Saved pet {} with ID: {}", pet.name, pet.id);
        Ok(())
    }

    pub fn get_pets_by_owner(&self, owner_id: &str) -> Result<Vec<Pet>> {
        let pets = self.pet_repository.list_pets_by_owner(owner_id)?;
        debug!("Found {} pets for owner {}", pets.len(), owner_id);
        Ok(pets)
    }

    pub fn get_pet_by_id(&self, pet_id: &str) -> Result<Option<Pet>> {
        let pet = self.pet_repository.find_pet_by_id(pet_id)?;
        if pet.is_none() {
            warn!("Pet not found: {}", pet_id);
        }
        Ok(pet)
    }

    /// The first few listings in publish order
    pub fn featured_pets(&self, limit: usize) -> Result<Vec<Pet>> {
        Ok(self.get_pets()?.into_iter().take(limit).collect())
    }

    /// Distinct breeds, sorted, for the breed filter
    pub fn unique_breeds(&self) -> Result<Vec<String>> {
        let breeds: BTreeSet<String> = self.get_pets()?.into_iter().map(|pet| pet.breed).collect();
        Ok(breeds.into_iter().collect())
    }

    /// Filter and sort listings for the browse page
    pub fn browse_pets(&self, query: &PetQuery) -> Result<Vec<Pet>> {
        let pets = filter_and_sort(self.get_pets()?, query);
        debug!("Browse matched {} pets", pets.len());
        Ok(pets)
    }

    /// Validate a draft and, if it passes, store it for the logged-in user.
    pub fn publish_listing(&self, draft: &PetFormData) -> Result<PublishOutcome> {
        let owner = match self.session_repository.get_auth_state()?.current_user {
            Some(user) => user,
            None => {
                warn!("Publish attempted without a logged-in user");
                return Ok(PublishOutcome::NotAuthenticated);
            }
        };

        let mut result = validate_listing(draft);
        let gender = draft.gender.parse::<Gender>();

        if gender.is_err() && !draft.gender.trim().is_empty() {
            result = reject_gender(result);
        }

        let gender = match (result.is_valid, gender) {
            (true, Ok(gender)) => gender,
            _ => {
                info!("Listing rejected with {} messages", result.messages.len());
                let responses = chatbot_response(&result);
                return Ok(PublishOutcome::Rejected { result, responses });
            }
        };

        let pet = Pet {
            id: generate_id(),
            name: draft.name.trim().to_string(),
            breed: draft.breed.trim().to_string(),
            age: draft.age.trim().to_string(),
            gender,
            health_info: draft.health_info.trim().to_string(),
            description: draft.description.trim().to_string(),
            image: draft.image.clone(),
            seller_contact: draft.seller_contact.trim().to_string(),
            owner_id: owner.id,
            created_at: now_rfc3339(),
        };

        self.save_pet(&pet)?;

        Ok(PublishOutcome::Published {
            responses: chatbot_response(&result),
            pet,
        })
    }
}

fn reject_gender(mut result: ValidationResult) -> ValidationResult {
    if result.is_valid {
        // Drop the closing lines attached to a passing verdict
        result.messages.clear();
        result.suggestions.clear();
        result.is_valid = false;
    }
    result.messages.push(INVALID_GENDER_MESSAGE.to_string());
    result
}

fn filter_and_sort(pets: Vec<Pet>, query: &PetQuery) -> Vec<Pet> {
    let search = query.search_term.to_lowercase();
    let breed = query.breed.to_lowercase();

    let mut matched: Vec<Pet> = pets
        .into_iter()
        .filter(|pet| {
            let matches_search = pet.name.to_lowercase().contains(&search)
                || pet.breed.to_lowercase().contains(&search)
                || pet.description.to_lowercase().contains(&search);
            let matches_breed = breed.is_empty() || pet.breed.to_lowercase().contains(&breed);
            let matches_gender = query.gender.map_or(true, |gender| pet.gender == gender);
            matches_search && matches_breed && matches_gender
        })
        .collect();

    // Unparseable timestamps sort as the oldest
    let created = |pet: &Pet| timestamp_millis(&pet.created_at).unwrap_or(i64::MIN);

    match query.sort_by {
        PetSortOrder::Newest => matched.sort_by_key(|pet| Reverse(created(pet))),
        PetSortOrder::Oldest => matched.sort_by_key(created),
        PetSortOrder::Name => matched.sort_by_cached_key(|pet| pet.name.to_lowercase()),
        PetSortOrder::Breed => matched.sort_by_cached_key(|pet| pet.breed.to_lowercase()),
    }

    matched
}

/// The listings shown on a fresh install
fn sample_pets(created_at: &str) -> Vec<Pet> {
    vec![
        Pet {
            id: "1".to_string(),
            name: "Buddy".to_string(),
            breed: "Golden Retriever".to_string(),
            age: "2 years".to_string(),
            gender: Gender::Male,
            health_info: "Vaccinated, healthy, very active".to_string(),
            description: "Buddy is a friendly and energetic Golden Retriever who loves playing fetch and swimming. He's great with kids and other dogs.".to_string(),
            image: "/src/assets/pet-1.jpg".to_string(),
            seller_contact: "john@example.com | (555) 123-4567".to_string(),
            owner_id: "demo-user".to_string(),
            created_at: created_at.to_string(),
        },
        Pet {
            id: "2".to_string(),
            name: "Whiskers".to_string(),
            breed: "Tabby Cat".to_string(),
            age: "3 years".to_string(),
            gender: Gender::Female,
            health_info: "Spayed, all shots up to date".to_string(),
            description: "Whiskers is a calm and affectionate cat who loves to curl up on your lap. She's perfect for apartment living.".to_string(),
            image: "/src/assets/pet-2.jpg".to_string(),
            seller_contact: "sarah@example.com | (555) 234-5678".to_string(),
            owner_id: "demo-user-2".to_string(),
            created_at: created_at.to_string(),
        },
        Pet {
            id: "3".to_string(),
            name: "Max".to_string(),
            breed: "Border Collie".to_string(),
            age: "1 year".to_string(),
            gender: Gender::Male,
            health_info: "Young, healthy, high energy".to_string(),
            description: "Max is an intelligent and trainable Border Collie puppy. He needs an active family who can keep up with his energy.".to_string(),
            image: "/src/assets/pet-3.jpg".to_string(),
            seller_contact: "mike@example.com | (555) 345-6789".to_string(),
            owner_id: "demo-user-3".to_string(),
            created_at: created_at.to_string(),
        },
    ]
}
