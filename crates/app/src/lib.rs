//! # netdevices-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (`DeviceRepository`: get, get-all, set, add, delete)
//! - Define the **driving port** as a use-case struct
//!   (`DeviceService`: list, get, create, update, register, delete)
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `netdevices-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
