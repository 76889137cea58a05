//! Doctor domain model.
//!
//! # Invariants
//! - `full_name` is non-empty after validation at the intake boundary.
//! - Name uniqueness is advisory only: checked before insert, not enforced
//!   by storage.

use serde::{Deserialize, Serialize};

/// Storage-assigned identity for a doctor row.
pub type DoctorId = i64;

/// Doctor record as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: DoctorId,
    pub full_name: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub years_of_experience: u32,
}

/// Insert shape for a doctor. Identity is assigned by storage.
///
/// All fields are expected to already satisfy the `validate` predicates;
/// repositories trust this shape and perform no field validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewDoctor {
    pub full_name: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub years_of_experience: u32,
}

impl NewDoctor {
    /// Creates an insert shape with only the required name set.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}
