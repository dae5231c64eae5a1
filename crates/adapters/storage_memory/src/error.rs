//! Storage-specific error type for the in-memory store.

use netdevices_domain::error::NetDevError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the lock, so the map may be
    /// half-updated.
    #[error("device store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for NetDevError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
