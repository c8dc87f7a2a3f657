//! # Listing Validator
//!
//! Rule-based quality check run on a draft listing before it is published.
//!
//! Every rule runs; failures accumulate rather than short-circuit, so the
//! seller sees all problems at once. Rules, in evaluation order:
//!
//! 1. Required text fields (name, breed, age, gender, health info,
//!    description, contact) must be non-blank, one message per missing field
//! 2. A photo must be attached
//! 3. Name is at least 2 characters
//! 4. Breed is at least 3 characters
//! 5. Age reads like "2 years", "6 months" or "1 yr old"
//! 6. Description is at least 20 characters
//! 7. Health information is at least 10 characters
//! 8. Contact holds an email address or a 10-digit phone number
//!
//! Rules 3-8 only look at fields that are present (non-blank), so a blank
//! field produces exactly one "required" message.
//!
//! The validator is a pure function with no state; call it as often as needed.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::{PetFormData, ValidationResult};

static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9]+\s*(?:year|years|month|months|yr|yrs|mo|mos)(?:\s*old)?$")
        .expect("valid age regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b").expect("valid phone regex"));

const MIN_NAME_LEN: usize = 2;
const MIN_BREED_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 20;
const MIN_HEALTH_INFO_LEN: usize = 10;

/// Closing lines appended to `messages` when every rule passes
pub const SUCCESS_MESSAGES: [&str; 2] = [
    "✅ Great! Your pet listing looks perfect!",
    "🎉 All information is complete and ready for publication",
];

/// Generic tips appended to `suggestions` when every rule passes
pub const SUCCESS_SUGGESTIONS: [&str; 2] = [
    "💡 Consider adding details about your pet's favorite activities",
    "🏠 Mention if your pet is good with kids or other animals",
];

/// Validate a draft listing.
pub fn validate_listing(draft: &PetFormData) -> ValidationResult {
    let mut messages = Vec::new();
    let mut suggestions = Vec::new();

    let required = [
        (draft.name.as_str(), "Pet Name"),
        (draft.breed.as_str(), "Breed"),
        (draft.age.as_str(), "Age"),
        (draft.gender.as_str(), "Gender"),
        (draft.health_info.as_str(), "Health Information"),
        (draft.description.as_str(), "Description"),
        (draft.seller_contact.as_str(), "Contact Information"),
    ];
    for (value, label) in required {
        if value.trim().is_empty() {
            messages.push(format!("🚫 {} is required", label));
        }
    }

    if draft.image.is_empty() {
        messages.push("🚫 Pet photo is required".to_string());
        suggestions.push("📸 Upload a clear, recent photo of your pet".to_string());
    }

    if let Some(name) = present(&draft.name) {
        if char_len(name) < MIN_NAME_LEN {
            messages.push("🚫 Pet name should be at least 2 characters long".to_string());
        }
    }

    if let Some(breed) = present(&draft.breed) {
        if char_len(breed) < MIN_BREED_LEN {
            messages.push("🚫 Please provide a valid breed name".to_string());
            suggestions
                .push("🐕 Examples: Labrador Retriever, Persian Cat, Mixed Breed".to_string());
        }
    }

    if let Some(age) = present(&draft.age) {
        if !is_valid_age(age) {
            messages.push("🚫 Please provide a valid age format".to_string());
            suggestions.push("⏰ Examples: \"2 years\", \"6 months\", \"1 year old\"".to_string());
        }
    }

    if let Some(description) = present(&draft.description) {
        if char_len(description) < MIN_DESCRIPTION_LEN {
            messages.push("🚫 Description should be at least 20 characters".to_string());
            suggestions.push(
                "📝 Tell us about your pet's personality, habits, and what makes them special!"
                    .to_string(),
            );
        }
    }

    if let Some(health_info) = present(&draft.health_info) {
        if char_len(health_info) < MIN_HEALTH_INFO_LEN {
            messages.push("🚫 Health information should be more detailed".to_string());
            suggestions.push(
                "🏥 Include vaccination status, any medical conditions, and general health"
                    .to_string(),
            );
        }
    }

    if let Some(contact) = present(&draft.seller_contact) {
        if !is_valid_contact(contact) {
            messages.push("🚫 Please provide valid contact information".to_string());
            suggestions
                .push("📞 Include email and/or phone number for interested buyers".to_string());
        }
    }

    let is_valid = messages.is_empty();
    if is_valid {
        messages.extend(SUCCESS_MESSAGES.iter().map(|m| m.to_string()));
        suggestions.extend(SUCCESS_SUGGESTIONS.iter().map(|s| s.to_string()));
    }

    ValidationResult {
        is_valid,
        messages,
        suggestions,
    }
}

/// Whether `age` reads like "2 years", "6 mos" or "1 year old"
pub fn is_valid_age(age: &str) -> bool {
    AGE_PATTERN.is_match(age.trim())
}

/// Whether `contact` contains an email address or a 3-3-4 phone number
pub fn is_valid_contact(contact: &str) -> bool {
    EMAIL_PATTERN.is_match(contact) || PHONE_PATTERN.is_match(contact)
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
