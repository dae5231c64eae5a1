//! Storage port: repository trait for device records.

use std::future::Future;

use netdevices_domain::device::Device;
use netdevices_domain::error::NetDevError;
use netdevices_domain::key::DeviceKey;

/// Keyed storage for [`Device`] records.
///
/// Implementations store each device under [`Device::key`], so lookups are
/// case-insensitive on the FQDN. They must be safe to share across request
/// handlers: concurrent reads are allowed and writes are exclusive.
pub trait DeviceRepository {
    /// Fetch the device stored under `key`.
    ///
    /// Fails with [`NetDevError::NotFound`] when nothing is stored there.
    fn get(&self, key: &DeviceKey) -> impl Future<Output = Result<Device, NetDevError>> + Send;

    /// Every stored device, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, NetDevError>> + Send;

    /// Store `device`, replacing whatever was under its key.
    fn set(&self, device: Device) -> impl Future<Output = Result<(), NetDevError>> + Send;

    /// Store `device` only if its key is free.
    ///
    /// Fails with [`NetDevError::AlreadyExists`] otherwise, leaving the
    /// existing record untouched.
    fn add(&self, device: Device) -> impl Future<Output = Result<(), NetDevError>> + Send;

    /// Remove the device under `key`. Removing an absent key succeeds.
    fn delete(&self, key: &DeviceKey) -> impl Future<Output = Result<(), NetDevError>> + Send;
}
