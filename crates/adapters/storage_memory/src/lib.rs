//! # netdevices-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `DeviceRepository` port defined in `netdevices-app::ports::storage`
//! - Keep devices in a map keyed by the lower-cased FQDN
//! - Guard the whole map with one reader/writer lock: reads run concurrently,
//!   writes exclude every other operation
//!
//! Nothing survives a restart.
//!
//! ## Dependency rule
//! Depends on `netdevices-app` (for port traits) and `netdevices-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod error;

pub use device_repo::InMemoryDeviceRepository;
pub use error::StorageError;
