use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered marketplace user.
///
/// Field names serialize in camelCase so the persisted blobs keep the layout
/// the browser build wrote to localStorage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across all users, matched case-sensitively
    pub email: String,
    /// Stored and compared in plaintext
    pub password: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Gender of a listed pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(GenderParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderParseError(pub String);

impl fmt::Display for GenderParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid gender: '{}'", self.0)
    }
}

impl std::error::Error for GenderParseError {}

/// A published pet listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Free text such as "2 years" or "6 months old"
    pub age: String,
    pub gender: Gender,
    pub health_info: String,
    pub description: String,
    /// Data URI or asset path
    pub image: String,
    pub seller_contact: String,
    /// Id of the owning user. Not checked against the users collection.
    pub owner_id: String,
    /// RFC 3339 timestamp, the authoritative sort key for "newest"
    pub created_at: String,
}

/// The single active login state tracked by the store.
///
/// `current_user` is a snapshot of the user taken at login time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_logged_in: bool,
    pub current_user: Option<User>,
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self {
            is_logged_in: false,
            current_user: None,
        }
    }

    pub fn logged_in(user: User) -> Self {
        Self {
            is_logged_in: true,
            current_user: Some(user),
        }
    }

    /// True when `current_user` is present exactly when `is_logged_in` is set
    pub fn is_consistent(&self) -> bool {
        self.is_logged_in == self.current_user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::logged_out()
    }
}

/// Unvalidated listing payload as collected by the add-pet form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFormData {
    pub name: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub health_info: String,
    pub description: String,
    pub image: String,
    pub seller_contact: String,
}

/// Verdict produced by the listing validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Display order matters: failures appear in rule order
    pub messages: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Sort order for browsing listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetSortOrder {
    #[default]
    Newest,
    Oldest,
    Name,
    Breed,
}

/// Filters applied when browsing all listings. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetQuery {
    pub search_term: String,
    pub breed: String,
    pub gender: Option<Gender>,
    pub sort_by: PetSortOrder,
}

/// Sign-up form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Indicator shown next to the password field while registering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn for_password(password: &str) -> Self {
        let len = password.chars().count();
        if len >= 6 {
            PasswordStrength::Strong
        } else if len >= 3 {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Weak
        }
    }
}
