use anyhow::Result;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::utils::{generate_id, now_rfc3339};
use crate::storage::traits::{SessionStorage, UserStorage};
use crate::storage::{RecordStore, SessionRepository, UserRepository};
use shared::{AuthState, PasswordStrength, RegistrationForm, User};

static SIGNUP_EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid signup email regex"));

const MIN_PASSWORD_LEN: usize = 6;

/// Problems with a sign-up form, checked before calling [`AuthService::register`].
/// The display text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Check a sign-up form. The first failing check wins.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), RegistrationError> {
    if form.name.trim().is_empty() {
        return Err(RegistrationError::MissingName);
    }
    if form.email.trim().is_empty() {
        return Err(RegistrationError::MissingEmail);
    }
    if !SIGNUP_EMAIL_PATTERN.is_match(&form.email) {
        return Err(RegistrationError::InvalidEmail);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegistrationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(RegistrationError::PasswordMismatch);
    }
    Ok(())
}

pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength::for_password(password)
}

/// Service handling registration, login and the active session.
///
/// Session transitions are LoggedOut -> LoggedIn -> LoggedOut; each call is a
/// single store write.
#[derive(Clone)]
pub struct AuthService {
    user_repository: UserRepository,
    session_repository: SessionRepository,
}

impl AuthService {
    pub fn new(store: RecordStore) -> Self {
        Self {
            user_repository: UserRepository::new(store.clone()),
            session_repository: SessionRepository::new(store),
        }
    }

    /// Create an account and log it in. Returns `None` when the email is taken.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Option<User>> {
        info!("Registering user with email: {}", email);

        if self.user_repository.find_user_by_email(email)?.is_some() {
            warn!("Registration rejected, email already in use: {}", email);
            return Ok(None);
        }

        let user = User {
            id: generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: now_rfc3339(),
        };

        self.user_repository.add_user(&user)?;
        self.session_repository
            .set_auth_state(&AuthState::logged_in(user.clone()))?;

        info!("Registered user {} with ID: {}", user.name, user.id);
        Ok(Some(user))
    }

    /// Validate a sign-up form and register it with trimmed name and email.
    ///
    /// The outer `Result` carries storage failures; the inner one the form
    /// problem or, for a taken email, `Ok(None)`.
    pub fn register_form(
        &self,
        form: &RegistrationForm,
    ) -> Result<Result<Option<User>, RegistrationError>> {
        if let Err(e) = validate_registration(form) {
            info!("Registration form rejected: {}", e);
            return Ok(Err(e));
        }
        let user = self.register(form.name.trim(), form.email.trim(), &form.password)?;
        Ok(Ok(user))
    }

    /// Log in with exact email and password. On failure the session is left
    /// untouched and the caller cannot tell an unknown email from a wrong
    /// password.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = self
            .user_repository
            .find_user_by_email(email)?
            .filter(|user| user.password == password);

        match user {
            Some(user) => {
                self.session_repository
                    .set_auth_state(&AuthState::logged_in(user.clone()))?;
                info!("User {} logged in", user.id);
                Ok(Some(user))
            }
            None => {
                warn!("Login failed for {}", email);
                Ok(None)
            }
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.session_repository
            .set_auth_state(&AuthState::logged_out())?;
        info!("Logged out");
        Ok(())
    }

    pub fn get_auth_state(&self) -> Result<AuthState> {
        Ok(self.session_repository.get_auth_state()?)
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(self.get_auth_state()?.current_user)
    }

    pub fn get_users(&self) -> Result<Vec<User>> {
        Ok(self.user_repository.list_users()?)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.user_repository.find_user_by_email(email)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::memory_store;
    use crate::storage::{MemoryBackend, StorageError};

    fn setup_test() -> AuthService {
        AuthService::new(memory_store())
    }

    fn seeded_with_demo_user() -> (AuthService, User) {
        let service = setup_test();
        let user = service
            .register("Demo User", "demo@petconnect.com", "demo123")
            .expect("Failed to register")
            .expect("Email should be free");
        service.logout().expect("Failed to log out");
        (service, user)
    }

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_register_creates_user_and_session() {
        let service = setup_test();

        let user = service
            .register("Alice", "alice@example.com", "secret1")
            .unwrap()
            .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(!user.id.is_empty());
        assert!(!user.created_at.is_empty());

        let state = service.get_auth_state().unwrap();
        assert!(state.is_logged_in);
        assert_eq!(state.current_user, Some(user.clone()));
        assert_eq!(service.get_users().unwrap(), vec![user]);
    }

    #[test]
    fn test_register_duplicate_email_returns_none() {
        let service = setup_test();
        service.register("Alice", "alice@example.com", "secret1").unwrap();
        let count = service.get_users().unwrap().len();

        let second = service
            .register("Other Alice", "alice@example.com", "different")
            .unwrap();
        assert!(second.is_none());
        assert_eq!(service.get_users().unwrap().len(), count);
    }

    #[test]
    fn test_register_email_is_case_sensitive() {
        let service = setup_test();
        service.register("Alice", "alice@example.com", "secret1").unwrap();
        assert!(service
            .register("Alice", "Alice@example.com", "secret1")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_login_success_sets_session() {
        let (service, user) = seeded_with_demo_user();
        assert!(!service.get_auth_state().unwrap().is_logged_in);

        let logged_in = service.login("demo@petconnect.com", "demo123").unwrap();
        assert_eq!(logged_in, Some(user.clone()));

        let state = service.get_auth_state().unwrap();
        assert!(state.is_logged_in);
        assert_eq!(state.current_user, Some(user));
    }

    #[test]
    fn test_login_failure_leaves_session_untouched() {
        let (service, _) = seeded_with_demo_user();
        let other = service
            .register("Bob", "bob@example.com", "bobpass")
            .unwrap()
            .unwrap();
        let before = service.get_auth_state().unwrap();
        assert_eq!(before.current_user, Some(other));

        assert!(service.login("demo@petconnect.com", "wrong").unwrap().is_none());
        assert!(service.login("demo@petconnect.com", "DEMO123").unwrap().is_none());
        assert!(service.login("nobody@example.com", "demo123").unwrap().is_none());

        assert_eq!(service.get_auth_state().unwrap(), before);
    }

    #[test]
    fn test_logout_is_unconditional() {
        let service = setup_test();
        service.logout().unwrap();
        assert_eq!(service.get_auth_state().unwrap(), AuthState::logged_out());

        service.register("Alice", "alice@example.com", "secret1").unwrap();
        service.logout().unwrap();
        let state = service.get_auth_state().unwrap();
        assert!(!state.is_logged_in);
        assert!(state.current_user.is_none());
        assert!(service.current_user().unwrap().is_none());
    }

    #[test]
    fn test_find_user_by_email() {
        let (service, user) = seeded_with_demo_user();
        assert_eq!(service.find_user_by_email("demo@petconnect.com").unwrap(), Some(user));
        assert!(service.find_user_by_email("missing@example.com").unwrap().is_none());
    }

    #[test]
    fn test_register_surfaces_storage_failure() {
        let service = AuthService::new(RecordStore::new(MemoryBackend::with_quota(8)));
        let err = service
            .register("Alice", "alice@example.com", "secret1")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_validate_registration_order() {
        assert_eq!(
            validate_registration(&form(" ", "", "", "")),
            Err(RegistrationError::MissingName)
        );
        assert_eq!(
            validate_registration(&form("Al", "  ", "", "")),
            Err(RegistrationError::MissingEmail)
        );
        assert_eq!(
            validate_registration(&form("Al", "not-an-email", "secret1", "secret1")),
            Err(RegistrationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration(&form("Al", "al@example.com", "12345", "12345")),
            Err(RegistrationError::PasswordTooShort)
        );
        assert_eq!(
            validate_registration(&form("Al", "al@example.com", "secret1", "secret2")),
            Err(RegistrationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration(&form("Al", "al@example.com", "secret1", "secret1")),
            Ok(())
        );
    }

    #[test]
    fn test_registration_error_messages() {
        assert_eq!(
            RegistrationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            RegistrationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_register_form_trims_name_and_email() {
        let service = setup_test();
        let user = service
            .register_form(&form("  Alice  ", " alice@example.com ", "secret1", "secret1"))
            .unwrap()
            .unwrap()
            .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");

        let rejected = service
            .register_form(&form("Alice", "alice@example.com", "123", "123"))
            .unwrap();
        assert_eq!(rejected, Err(RegistrationError::PasswordTooShort));

        let duplicate = service
            .register_form(&form("Alice", "alice@example.com", "secret1", "secret1"))
            .unwrap();
        assert_eq!(duplicate, Ok(None));
    }

    #[test]
    fn test_password_strength_levels() {
        assert_eq!(password_strength("ab"), PasswordStrength::Weak);
        assert_eq!(password_strength("abcd"), PasswordStrength::Medium);
        assert_eq!(password_strength("abcdefg"), PasswordStrength::Strong);
    }
}
