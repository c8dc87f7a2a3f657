//! # Domain Module
//!
//! Business logic for the PetConnect marketplace, sitting between the UI and
//! the storage layer.
//!
//! ## Services
//!
//! - **AuthService**: registration, login, logout and the active session
//! - **PetService**: sample data seeding, listing lookups, browsing and the
//!   publish flow
//!
//! ## Free functions
//!
//! - [`validate_listing`]: rule-based quality check for a draft listing
//! - [`chatbot_response`]: the assistant lines shown for a validation verdict
//! - [`utils`]: id generation and date formatting
//!
//! Services hold repositories built over a shared [`crate::storage::RecordStore`]
//! and keep no state of their own.

pub mod auth_service;
pub mod chatbot;
pub mod commands;
pub mod listing_validator;
pub mod pet_service;
pub mod utils;

pub use auth_service::{password_strength, validate_registration, AuthService, RegistrationError};
pub use chatbot::chatbot_response;
pub use commands::pets::PublishOutcome;
pub use listing_validator::validate_listing;
pub use pet_service::{PetService, FEATURED_PET_COUNT};
pub use utils::{format_date, generate_id};
