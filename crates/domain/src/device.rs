//! Device: a network device in the catalog, identified by its FQDN.

use serde::{Deserialize, Serialize};

use crate::catalog::ModelCatalog;
use crate::error::{NetDevError, ValidationError};
use crate::key::DeviceKey;

/// Version shown to clients when a device has none recorded.
pub const UNKNOWN_VERSION: &str = "unknown";

/// A network device.
///
/// Every field defaults to an empty string when missing from JSON input, so
/// an omitted `fqdn` or `model` is reported by [`Device::validate`] rather
/// than by the decoder. Capitalised keys (`FQDN`, `Model`, ...) are accepted
/// on input; output always uses the lower-case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    #[serde(alias = "FQDN", alias = "Fqdn")]
    pub fqdn: String,
    #[serde(alias = "Model", alias = "MODEL")]
    pub model: String,
    #[serde(alias = "Version", alias = "VERSION")]
    pub version: String,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// The storage key for this device.
    #[must_use]
    pub fn key(&self) -> DeviceKey {
        DeviceKey::new(&self.fqdn)
    }

    /// Check domain invariants against the accepted `models`.
    ///
    /// Only emptiness of the FQDN is checked, not its syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFqdn`] when `fqdn` is empty and
    /// [`ValidationError::InvalidModel`] when `model` is not in `models`.
    pub fn validate(&self, models: &ModelCatalog) -> Result<(), ValidationError> {
        if self.fqdn.is_empty() {
            return Err(ValidationError::InvalidFqdn);
        }
        if !models.contains(&self.model) {
            return Err(ValidationError::InvalidModel {
                model: self.model.clone(),
            });
        }
        Ok(())
    }

    /// Display form of this device: an empty version becomes `"unknown"`.
    #[must_use]
    pub fn present(&self) -> Self {
        let version = if self.version.is_empty() {
            UNKNOWN_VERSION.to_string()
        } else {
            self.version.clone()
        };
        Self {
            fqdn: self.fqdn.clone(),
            model: self.model.clone(),
            version,
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    fqdn: Option<String>,
    model: Option<String>,
    version: Option<String>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn fqdn(mut self, fqdn: impl Into<String>) -> Self {
        self.fqdn = Some(fqdn.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Consume the builder, validate against `models`, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`NetDevError::Validation`] if `fqdn` is missing or empty, or
    /// if `model` is not in `models`.
    pub fn build(self, models: &ModelCatalog) -> Result<Device, NetDevError> {
        let device = Device {
            fqdn: self.fqdn.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            version: self.version.unwrap_or_default(),
        };
        device.validate(models)?;
        Ok(device)
    }
}
