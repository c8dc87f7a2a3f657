use log::debug;
use shared::User;

use crate::storage::error::StorageResult;
use crate::storage::record_store::{CollectionKey, RecordStore};
use crate::storage::traits::UserStorage;

/// Repository for registered users
#[derive(Clone)]
pub struct UserRepository {
    store: RecordStore,
}

impl UserRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl UserStorage for UserRepository {
    fn list_users(&self) -> StorageResult<Vec<User>> {
        self.store.read(CollectionKey::Users)
    }

    fn add_user(&self, user: &User) -> StorageResult<()> {
        debug!("Storing user {}", user.id);
        self.store.append(CollectionKey::Users, user)
    }

    fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        Ok(self
            .list_users()?
            .into_iter()
            .find(|user| user.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: email.to_string(),
            password: "secret1".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
        }
    }

    fn setup_test() -> UserRepository {
        UserRepository::new(RecordStore::new(MemoryBackend::new()))
    }

    #[test]
    fn test_list_users_in_registration_order() {
        let repo = setup_test();
        assert!(repo.list_users().unwrap().is_empty());

        repo.add_user(&user("b", "b@example.com")).unwrap();
        repo.add_user(&user("a", "a@example.com")).unwrap();

        let ids: Vec<String> = repo.list_users().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_find_user_by_email_is_exact() {
        let repo = setup_test();
        repo.add_user(&user("1", "Alice@example.com")).unwrap();

        assert!(repo.find_user_by_email("Alice@example.com").unwrap().is_some());
        assert!(repo.find_user_by_email("alice@example.com").unwrap().is_none());
        assert!(repo.find_user_by_email("Alice@example.com ").unwrap().is_none());
    }

    #[test]
    fn test_find_user_by_email_first_match_wins() {
        let repo = setup_test();
        // The repository itself does not enforce uniqueness
        repo.add_user(&user("first", "dup@example.com")).unwrap();
        repo.add_user(&user("second", "dup@example.com")).unwrap();

        let found = repo.find_user_by_email("dup@example.com").unwrap().unwrap();
        assert_eq!(found.id, "first");
        assert_eq!(repo.list_users().unwrap().len(), 2);
    }
}
