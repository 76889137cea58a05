//! Patient domain model.
//!
//! # Invariants
//! - `date_of_birth` is a real calendar date; it is persisted as ISO
//!   `YYYY-MM-DD` text and parsed back at the repository boundary.
//! - Name uniqueness is advisory only, same policy as doctors.

use super::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage-assigned identity for a patient row.
pub type PatientId = i64;

/// Patient record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: PatientId,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Insert shape for a patient. Identity is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl NewPatient {
    /// Creates an insert shape with the required fields set.
    pub fn new(full_name: impl Into<String>, date_of_birth: NaiveDate, gender: Gender) -> Self {
        Self {
            full_name: full_name.into(),
            date_of_birth,
            gender,
            address: None,
            phone_number: None,
            email: None,
        }
    }
}
