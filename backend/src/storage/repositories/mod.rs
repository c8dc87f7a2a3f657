// Repository modules
pub mod user_repository;
pub mod pet_repository;
pub mod session_repository;

// Re-export repository types
pub use user_repository::UserRepository;
pub use pet_repository::PetRepository;
pub use session_repository::SessionRepository;
