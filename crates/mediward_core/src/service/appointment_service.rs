//! Appointment use-case service.
//!
//! # Responsibility
//! - Orchestrate appointment scheduling over three repositories.
//! - Verify referenced patient and doctor ids exist before insert, ahead
//!   of the storage-level foreign-key backstop.

use crate::model::appointment::{
    Appointment, AppointmentId, AppointmentPatch, NewAppointment,
};
use crate::repo::appointment_repo::AppointmentRepository;
use crate::repo::doctor_repo::DoctorRepository;
use crate::repo::patient_repo::PatientRepository;
use crate::repo::{RepoError, RepoResult, SortOrder};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Scheduling failure: reference checks or persistence.
#[derive(Debug)]
pub enum ScheduleError {
    /// The referenced patient id matches no stored patient.
    UnknownPatient(i64),
    /// The referenced doctor id matches no stored doctor.
    UnknownDoctor(i64),
    Repo(RepoError),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPatient(id) => write!(f, "no patient with id {id}"),
            Self::UnknownDoctor(id) => write!(f, "no doctor with id {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::UnknownPatient(_) | Self::UnknownDoctor(_) => None,
        }
    }
}

impl From<RepoError> for ScheduleError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for appointment scheduling and reporting.
pub struct AppointmentService<A, P, D>
where
    A: AppointmentRepository,
    P: PatientRepository,
    D: DoctorRepository,
{
    appointments: A,
    patients: P,
    doctors: D,
}

impl<A, P, D> AppointmentService<A, P, D>
where
    A: AppointmentRepository,
    P: PatientRepository,
    D: DoctorRepository,
{
    /// Creates a service over the three injected repositories.
    pub fn new(appointments: A, patients: P, doctors: D) -> Self {
        Self {
            appointments,
            patients,
            doctors,
        }
    }

    /// Schedules a new appointment after verifying its references.
    ///
    /// The checks here give the operator a precise message; the foreign-key
    /// constraints still reject the insert if the check is bypassed.
    pub fn schedule(&self, appointment: &NewAppointment) -> Result<AppointmentId, ScheduleError> {
        if self.patients.find_by_id(appointment.patient_id)?.is_none() {
            return Err(ScheduleError::UnknownPatient(appointment.patient_id));
        }
        if let Some(doctor_id) = appointment.doctor_id {
            if self.doctors.find_by_id(doctor_id)?.is_none() {
                return Err(ScheduleError::UnknownDoctor(doctor_id));
            }
        }

        let id = self.appointments.add(appointment)?;
        info!("event=appointment_scheduled module=service status=ok appointment_id={id}");
        Ok(id)
    }

    /// Applies a partial update to one appointment.
    pub fn update(&self, id: AppointmentId, patch: &AppointmentPatch) -> RepoResult<()> {
        self.appointments.update(id, patch)?;
        info!("event=appointment_updated module=service status=ok appointment_id={id}");
        Ok(())
    }

    /// Gets one appointment by id, with joined names.
    pub fn find_by_id(&self, id: AppointmentId) -> RepoResult<Option<Appointment>> {
        self.appointments.find_by_id(id)
    }

    /// Lists every appointment ordered by date.
    pub fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Appointment>> {
        self.appointments.list_all(order)
    }

    /// Lists the appointments of one patient.
    pub fn find_by_patient(&self, patient_id: i64) -> RepoResult<Vec<Appointment>> {
        self.appointments.find_by_patient(patient_id)
    }

    /// Lists the appointments of one doctor.
    pub fn find_by_doctor(&self, doctor_id: i64) -> RepoResult<Vec<Appointment>> {
        self.appointments.find_by_doctor(doctor_id)
    }

    /// Lists the appointments on one calendar date.
    pub fn list_on(&self, date: NaiveDate) -> RepoResult<Vec<Appointment>> {
        self.appointments.list_on(date)
    }

    /// Lists today's appointments.
    pub fn list_today(&self) -> RepoResult<Vec<Appointment>> {
        self.appointments.list_today()
    }
}
