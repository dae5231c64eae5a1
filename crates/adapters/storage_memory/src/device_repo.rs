//! In-memory implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use netdevices_app::ports::DeviceRepository;
use netdevices_domain::device::Device;
use netdevices_domain::error::{AlreadyExistsError, NetDevError, NotFoundError};
use netdevices_domain::key::DeviceKey;

use crate::error::StorageError;

const ENTITY: &str = "Device";

type DeviceMap = HashMap<DeviceKey, Device>;

/// Map-backed device repository.
///
/// One [`RwLock`] covers the whole map. Guards are taken and released inside
/// each call, never held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryDeviceRepository {
    items: RwLock<DeviceMap>,
}

impl InMemoryDeviceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, DeviceMap>, StorageError> {
        self.items.read().map_err(|_| {
            tracing::error!("device store lock poisoned on read");
            StorageError::Poisoned
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, DeviceMap>, StorageError> {
        self.items.write().map_err(|_| {
            tracing::error!("device store lock poisoned on write");
            StorageError::Poisoned
        })
    }

    fn lookup(&self, key: &DeviceKey) -> Result<Device, NetDevError> {
        let items = self.read()?;
        items.get(key).cloned().ok_or_else(|| {
            NotFoundError {
                entity: ENTITY,
                id: key.to_string(),
            }
            .into()
        })
    }

    fn snapshot(&self) -> Result<Vec<Device>, NetDevError> {
        let items = self.read()?;
        Ok(items.values().cloned().collect())
    }

    fn upsert(&self, device: Device) -> Result<(), NetDevError> {
        let mut items = self.write()?;
        items.insert(device.key(), device);
        Ok(())
    }

    fn insert_new(&self, device: Device) -> Result<(), NetDevError> {
        let mut items = self.write()?;
        let key = device.key();
        if items.contains_key(&key) {
            return Err(AlreadyExistsError {
                entity: ENTITY,
                id: key.to_string(),
            }
            .into());
        }
        items.insert(key, device);
        Ok(())
    }

    fn remove(&self, key: &DeviceKey) -> Result<(), NetDevError> {
        let mut items = self.write()?;
        items.remove(key);
        Ok(())
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    fn get(&self, key: &DeviceKey) -> impl Future<Output = Result<Device, NetDevError>> + Send {
        let result = self.lookup(key);
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, NetDevError>> + Send {
        let result = self.snapshot();
        async move { result }
    }

    fn set(&self, device: Device) -> impl Future<Output = Result<(), NetDevError>> + Send {
        let result = self.upsert(device);
        async move { result }
    }

    fn add(&self, device: Device) -> impl Future<Output = Result<(), NetDevError>> + Send {
        let result = self.insert_new(device);
        async move { result }
    }

    fn delete(&self, key: &DeviceKey) -> impl Future<Output = Result<(), NetDevError>> + Send {
        let result = self.remove(key);
        async move { result }
    }
}
