//! Appointment domain model.
//!
//! # Responsibility
//! - Define the denormalized read shape used by listings and reports.
//! - Define the insert shape and the explicit partial-update shape.
//!
//! # Invariants
//! - `patient_id` always references an existing patient (storage-enforced,
//!   cascade on patient delete).
//! - `doctor_id` is optional and nulled by storage when the doctor is
//!   deleted; display shapes must tolerate the missing doctor.

use super::doctor::DoctorId;
use super::patient::PatientId;
use super::AppointmentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned identity for an appointment row.
pub type AppointmentId = i64;

/// Appointment read model, denormalized with the joined patient and doctor
/// names so listings can be rendered without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: Option<DoctorId>,
    pub doctor_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Insert shape for an appointment.
///
/// Callers are responsible for verifying that `patient_id` and (when set)
/// `doctor_id` reference existing rows before insert; the foreign-key
/// constraints are the storage-level backstop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub doctor_id: Option<DoctorId>,
    pub appointment_date: NaiveDate,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Explicit partial-update shape: only `Some` fields are written.
///
/// `doctor_id` uses a nested `Option` so a patch can distinguish "leave
/// unchanged" (`None`) from "clear the doctor" (`Some(None)`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppointmentPatch {
    pub patient_id: Option<PatientId>,
    pub doctor_id: Option<Option<DoctorId>>,
    pub appointment_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentPatch {
    /// Returns whether the patch carries no fields to write.
    pub fn is_empty(&self) -> bool {
        self.patient_id.is_none()
            && self.doctor_id.is_none()
            && self.appointment_date.is_none()
            && self.reason.is_none()
            && self.status.is_none()
    }

    /// Convenience patch that only moves the status.
    pub fn status_only(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppointmentPatch, AppointmentStatus};

    #[test]
    fn default_patch_is_empty() {
        assert!(AppointmentPatch::default().is_empty());
    }

    #[test]
    fn status_only_patch_is_not_empty() {
        let patch = AppointmentPatch::status_only(AppointmentStatus::Done);
        assert!(!patch.is_empty());
        assert_eq!(patch.status, Some(AppointmentStatus::Done));
        assert!(patch.doctor_id.is_none());
    }

    #[test]
    fn clearing_doctor_is_a_non_empty_patch() {
        let patch = AppointmentPatch {
            doctor_id: Some(None),
            ..AppointmentPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
