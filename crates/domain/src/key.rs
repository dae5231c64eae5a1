//! Storage key for devices.

use std::fmt;

/// Case-insensitive lookup key derived from a device FQDN.
///
/// The inner string is always lower-cased, so two FQDNs that differ only by
/// case map to the same key. The original spelling stays on the [`Device`]
/// record itself.
///
/// [`Device`]: crate::device::Device
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceKey(String);

impl DeviceKey {
    /// Normalize `fqdn` into a key.
    #[must_use]
    pub fn new(fqdn: &str) -> Self {
        Self(fqdn.to_lowercase())
    }

    /// Access the normalized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
