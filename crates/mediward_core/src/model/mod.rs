//! Domain models for hospital records.
//!
//! # Responsibility
//! - Define canonical record shapes for doctors, patients and appointments.
//! - Define the fixed enumerations persisted as text columns.
//!
//! # Invariants
//! - Identity is assigned by storage and never reused once assigned.
//! - Insert shapes (`New*`) carry no identity; read shapes always do.

pub mod appointment;
pub mod doctor;
pub mod patient;

use serde::{Deserialize, Serialize};

/// Patient gender as persisted in `patients.gender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Returns the stored text value for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parses operator input, normalizing case (`male` -> `Male`).
    ///
    /// Returns `None` when the input is not a member of the enumeration.
    pub fn parse(value: &str) -> Option<Self> {
        match crate::validate::title_case(value.trim()).as_str() {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Appointment lifecycle state as persisted in `appointments.status`.
///
/// `Pending` is the only state assigned on creation. Transitions between
/// states are unrestricted and driven by operator updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Done,
    Cancelled,
}

impl AppointmentStatus {
    /// Returns the stored text value for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parses operator input, normalizing case (`done` -> `Done`).
    ///
    /// Returns `None` when the input is not a member of the enumeration.
    pub fn parse(value: &str) -> Option<Self> {
        match crate::validate::title_case(value.trim()).as_str() {
            "Pending" => Some(Self::Pending),
            "Done" => Some(Self::Done),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::{AppointmentStatus, Gender};

    #[test]
    fn gender_parse_normalizes_case() {
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse(" MALE "), Some(Gender::Male));
        assert_eq!(Gender::parse("unknown"), None);
    }

    #[test]
    fn status_parse_normalizes_case() {
        assert_eq!(
            AppointmentStatus::parse("cancelled"),
            Some(AppointmentStatus::Cancelled)
        );
        assert_eq!(
            AppointmentStatus::parse("pending "),
            Some(AppointmentStatus::Pending)
        );
        assert_eq!(AppointmentStatus::parse("closed"), None);
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
    }

    #[test]
    fn enum_text_round_trips() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(Gender::parse(gender.as_str()), Some(gender));
        }
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Done,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
    }
}
