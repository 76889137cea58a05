//! Core domain logic for MediWard hospital records.
//! This crate is the single source of truth for schema, validation and
//! repository contracts; menu shells stay presentation-only.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::{
    Appointment, AppointmentId, AppointmentPatch, NewAppointment,
};
pub use model::doctor::{Doctor, DoctorId, NewDoctor};
pub use model::patient::{NewPatient, Patient, PatientId};
pub use model::{AppointmentStatus, Gender};
pub use repo::appointment_repo::{AppointmentRepository, SqliteAppointmentRepository};
pub use repo::doctor_repo::{DoctorRepository, SqliteDoctorRepository};
pub use repo::patient_repo::{PatientRepository, SqlitePatientRepository};
pub use repo::{RepoError, RepoResult, SortOrder};
pub use service::appointment_service::{AppointmentService, ScheduleError};
pub use service::doctor_service::DoctorService;
pub use service::patient_service::PatientService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
