//! Domain-level command and result types used by the services. The UI maps
//! its own form state onto these.

pub mod pets {
    use shared::{Pet, ValidationResult};

    /// Result of trying to publish a draft listing.
    #[derive(Debug, Clone, PartialEq)]
    pub enum PublishOutcome {
        /// No user is logged in; nothing was stored
        NotAuthenticated,
        /// The draft failed validation; nothing was stored
        Rejected {
            result: ValidationResult,
            /// Assistant lines to show the seller
            responses: Vec<String>,
        },
        /// The listing was stored
        Published {
            pet: Pet,
            responses: Vec<String>,
        },
    }

    impl PublishOutcome {
        pub fn is_published(&self) -> bool {
            matches!(self, PublishOutcome::Published { .. })
        }

        pub fn published_pet(&self) -> Option<&Pet> {
            match self {
                PublishOutcome::Published { pet, .. } => Some(pet),
                _ => None,
            }
        }
    }
}
