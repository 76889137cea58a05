//! Doctor use-case service.
//!
//! # Responsibility
//! - Provide stable registry entry points for menu callers.
//! - Perform the advisory duplicate-name check before registration.

use crate::model::doctor::{Doctor, DoctorId, NewDoctor};
use crate::repo::doctor_repo::DoctorRepository;
use crate::repo::{RepoResult, SortOrder};
use log::info;

/// Use-case service wrapper for doctor registry operations.
pub struct DoctorService<R: DoctorRepository> {
    repo: R,
}

impl<R: DoctorRepository> DoctorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new doctor and returns the assigned id.
    ///
    /// Fields must already satisfy the `validate` predicates; this method
    /// does not re-check them.
    pub fn register(&self, doctor: &NewDoctor) -> RepoResult<DoctorId> {
        let id = self.repo.add(doctor)?;
        info!("event=doctor_registered module=service status=ok doctor_id={id}");
        Ok(id)
    }

    /// Advisory duplicate check: whether a doctor with exactly this name is
    /// already stored.
    ///
    /// Two-step and racy by design under concurrent writers; the single
    /// operator model accepts this.
    pub fn name_exists(&self, full_name: &str) -> RepoResult<bool> {
        let needle = full_name.trim();
        Ok(self
            .repo
            .list_existing_names()?
            .iter()
            .any(|name| name == needle))
    }

    /// Gets one doctor by id.
    pub fn find_by_id(&self, id: DoctorId) -> RepoResult<Option<Doctor>> {
        self.repo.find_by_id(id)
    }

    /// Searches doctors by name substring.
    pub fn find_by_name_contains(
        &self,
        needle: &str,
        order: SortOrder,
    ) -> RepoResult<Vec<Doctor>> {
        self.repo.find_by_name_contains(needle, order)
    }

    /// Lists all doctors ordered by name.
    pub fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Doctor>> {
        self.repo.list_all(order)
    }

    /// Lists all doctors ordered by years of experience.
    pub fn list_by_experience(&self, order: SortOrder) -> RepoResult<Vec<Doctor>> {
        self.repo.list_by_experience(order)
    }
}
