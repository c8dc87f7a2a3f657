//! # PetConnect Backend
//!
//! Local record store, authentication and listing validation for the
//! PetConnect pet marketplace. Everything is synchronous and runs in-process;
//! the UI calls the services held by [`AppState`] directly.

use anyhow::{Context, Result};
use log::info;

pub mod config;
pub mod domain;
pub mod logging;
pub mod storage;

pub use config::{BackendConfig, StorageBackendKind, StorageConfig};
pub use domain::{AuthService, PetService};
pub use storage::{RecordStore, StorageError};

/// Everything the UI needs, built over one shared record store
#[derive(Clone)]
pub struct AppState {
    store: RecordStore,
    pub auth_service: AuthService,
    pub pet_service: PetService,
}

impl AppState {
    /// Wire the services over an existing store
    pub fn new(store: RecordStore) -> Self {
        Self {
            auth_service: AuthService::new(store.clone()),
            pet_service: PetService::new(store.clone()),
            store,
        }
    }

    /// Remove every persisted collection. The next start sees an empty store.
    pub fn reset(&self) -> Result<()> {
        self.store.clear()?;
        info!("Cleared all PetConnect data");
        Ok(())
    }
}

/// Install logging at the configured level, build the store described by
/// `config`, wire the services and seed the sample listings if enabled.
///
/// A log subscriber installed earlier by the host stays in place.
pub fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    logging::init_logging(&config.log_level)?;

    let store = match config.storage.backend {
        StorageBackendKind::Memory => {
            let backend = match config.storage.quota_bytes {
                Some(quota) => storage::MemoryBackend::with_quota(quota),
                None => storage::MemoryBackend::new(),
            };
            info!("Using in-memory storage");
            RecordStore::new(backend)
        }
        StorageBackendKind::JsonFile => {
            let directory = config.storage.resolved_data_directory();
            let backend = storage::JsonFileBackend::new(&directory)
                .with_context(|| format!("Failed to open data directory {:?}", directory))?
                .with_quota(config.storage.quota_bytes);
            info!("Using JSON file storage at {:?}", directory);
            RecordStore::new(backend)
        }
    };

    let state = AppState::new(store);

    if config.seed_sample_data {
        state.pet_service.initialize_default_data()?;
    }

    Ok(state)
}
