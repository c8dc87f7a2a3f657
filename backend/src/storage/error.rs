use thiserror::Error;

/// Faults raised by the storage layer. These are the only errors expected to
/// cross the core boundary; "not found" is never an error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        required: usize,
        limit: usize,
    },

    #[error("Failed to (de)serialize '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;
