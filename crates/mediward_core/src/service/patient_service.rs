//! Patient use-case service.
//!
//! # Responsibility
//! - Provide stable registry entry points for menu callers.
//! - Perform the advisory duplicate-name check before registration.

use crate::model::patient::{NewPatient, Patient, PatientId};
use crate::repo::patient_repo::PatientRepository;
use crate::repo::{RepoResult, SortOrder};
use log::info;

/// Use-case service wrapper for patient registry operations.
pub struct PatientService<R: PatientRepository> {
    repo: R,
}

impl<R: PatientRepository> PatientService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new patient and returns the assigned id.
    ///
    /// Fields must already satisfy the `validate` predicates; this method
    /// does not re-check them.
    pub fn register(&self, patient: &NewPatient) -> RepoResult<PatientId> {
        let id = self.repo.add(patient)?;
        info!("event=patient_registered module=service status=ok patient_id={id}");
        Ok(id)
    }

    /// Advisory duplicate check: whether a patient with exactly this name
    /// is already stored. Two-step and racy by design.
    pub fn name_exists(&self, full_name: &str) -> RepoResult<bool> {
        let needle = full_name.trim();
        Ok(self
            .repo
            .list_existing_names()?
            .iter()
            .any(|name| name == needle))
    }

    /// Gets one patient by id.
    pub fn find_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>> {
        self.repo.find_by_id(id)
    }

    /// Searches patients by name substring.
    pub fn find_by_name_contains(
        &self,
        needle: &str,
        order: SortOrder,
    ) -> RepoResult<Vec<Patient>> {
        self.repo.find_by_name_contains(needle, order)
    }

    /// Lists all patients ordered by name.
    pub fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Patient>> {
        self.repo.list_all(order)
    }
}
