//! Device service: use-cases for managing the device catalog.

use netdevices_domain::catalog::ModelCatalog;
use netdevices_domain::device::Device;
use netdevices_domain::error::NetDevError;
use netdevices_domain::key::DeviceKey;

use crate::ports::DeviceRepository;

/// Application service for device CRUD operations.
pub struct DeviceService<R> {
    repo: R,
    models: ModelCatalog,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository, accepting the
    /// default model codes.
    pub fn new(repo: R) -> Self {
        Self::with_models(repo, ModelCatalog::default())
    }

    /// Create a new service that only accepts the given model codes.
    pub fn with_models(repo: R, models: ModelCatalog) -> Self {
        Self { repo, models }
    }

    /// The model codes this service accepts.
    pub fn models(&self) -> &ModelCatalog {
        &self.models
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, NetDevError> {
        self.repo.get_all().await
    }

    /// Look up a device by FQDN, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`NetDevError::NotFound`] when no device with `fqdn` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, fqdn: &str) -> Result<Device, NetDevError> {
        self.repo.get(&DeviceKey::new(fqdn)).await
    }

    /// Validate and store a device, replacing any device with the same FQDN.
    ///
    /// # Errors
    ///
    /// Returns [`NetDevError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(fqdn = %device.fqdn))]
    pub async fn create_device(&self, device: Device) -> Result<Device, NetDevError> {
        device.validate(&self.models)?;
        self.repo.set(device.clone()).await?;
        Ok(device)
    }

    /// Validate and store a device over the one with the same FQDN.
    ///
    /// No existence check is made: updating an unknown FQDN creates it.
    ///
    /// # Errors
    ///
    /// Returns [`NetDevError::Validation`] if invariants fail, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, device), fields(fqdn = %device.fqdn))]
    pub async fn update_device(&self, device: Device) -> Result<Device, NetDevError> {
        device.validate(&self.models)?;
        self.repo.set(device.clone()).await?;
        Ok(device)
    }

    /// Validate and store a device only if its FQDN is not taken yet.
    ///
    /// # Errors
    ///
    /// Returns [`NetDevError::Validation`] if invariants fail,
    /// [`NetDevError::AlreadyExists`] if the FQDN is taken, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self, device), fields(fqdn = %device.fqdn))]
    pub async fn register_device(&self, device: Device) -> Result<Device, NetDevError> {
        device.validate(&self.models)?;
        self.repo.add(device.clone()).await?;
        Ok(device)
    }

    /// Delete a device by FQDN. Deleting an unknown FQDN succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, fqdn: &str) -> Result<(), NetDevError> {
        self.repo.delete(&DeviceKey::new(fqdn)).await
    }
}
