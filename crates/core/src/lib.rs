//! # SalonBook Core
//!
//! Domain types and the availability computation for the SalonBook
//! appointment service. This crate has no IO: persistence and HTTP live in
//! the `salonbook-db` and `salonbook-api` crates and depend on the models
//! and the slot generator defined here.

/// Error types shared across the application
pub mod errors;
/// Domain models and request/response types
pub mod models;
/// Availability computation (the slot generator)
pub mod slots;
