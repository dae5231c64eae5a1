//! # netdevices-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** for the device catalog (`/devices`, `/devices/{fqdn}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, presenting each device
//!   before it is serialized
//! - Map domain errors and undecodable bodies into JSON error responses
//!
//! ## Dependency rule
//! Depends on `netdevices-app` (for port traits and services) and
//! `netdevices-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
