//! # netdevices-domain
//!
//! Pure domain model for the netdevices catalog.
//!
//! ## Responsibilities
//! - Define **Devices** (network devices identified by FQDN)
//! - Define the **DeviceKey** used for case-insensitive storage lookups
//! - Define the **ModelCatalog** of accepted vendor model codes
//! - Enforce device invariants (validation) and the display transform
//!   applied before a device leaves the service (presentation)
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod key;

pub mod catalog;
pub mod device;
