//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Host the caller-side checks the repositories deliberately do not do:
//!   the advisory duplicate-name check and appointment reference checks.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.
//! - Services remain storage-agnostic: they depend on repository traits.

pub mod appointment_service;
pub mod doctor_service;
pub mod patient_service;
