//! Appointment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/list/partial-update APIs over `appointments`.
//! - Return denormalized rows carrying the joined patient and doctor names.
//!
//! # Invariants
//! - Every read joins patients (INNER, required reference) and doctors
//!   (LEFT, optional reference nulled on doctor delete).
//! - Partial updates write exactly the supplied columns and always touch
//!   `updated_at`.
//! - Referential integrity is enforced by the foreign-key constraints; a
//!   violation surfaces as a recoverable `RepoError::Db`.

use crate::model::appointment::{
    Appointment, AppointmentId, AppointmentPatch, NewAppointment,
};
use crate::model::AppointmentStatus;
use crate::repo::{RepoError, RepoResult, SortOrder};
use crate::validate::parse_date;
use chrono::{Local, NaiveDate};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const APPOINTMENT_SELECT_SQL: &str = "SELECT
    a.appointment_id,
    a.patient_id,
    p.full_name AS patient_name,
    a.doctor_id,
    d.full_name AS doctor_name,
    a.appointment_date,
    a.reason,
    a.status
FROM appointments a
JOIN patients p ON a.patient_id = p.patient_id
LEFT JOIN doctors d ON a.doctor_id = d.doctor_id";

/// Repository interface for appointment records.
pub trait AppointmentRepository {
    /// Inserts a new appointment and returns the storage-assigned id.
    ///
    /// Callers must have verified the referenced patient (and doctor, when
    /// set) exist; the foreign keys reject the insert otherwise.
    fn add(&self, appointment: &NewAppointment) -> RepoResult<AppointmentId>;
    /// Gets zero or one appointment by id, with joined names.
    fn find_by_id(&self, id: AppointmentId) -> RepoResult<Option<Appointment>>;
    /// Lists every appointment ordered by date.
    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Appointment>>;
    /// Lists the appointments of one patient, ordered by date.
    fn find_by_patient(&self, patient_id: i64) -> RepoResult<Vec<Appointment>>;
    /// Lists the appointments of one doctor, ordered by date.
    fn find_by_doctor(&self, doctor_id: i64) -> RepoResult<Vec<Appointment>>;
    /// Lists the appointments on one calendar date, ordered by status.
    fn list_on(&self, date: NaiveDate) -> RepoResult<Vec<Appointment>>;
    /// Lists today's appointments, ordered by status.
    fn list_today(&self) -> RepoResult<Vec<Appointment>> {
        self.list_on(Local::now().date_naive())
    }
    /// Applies a partial update touching exactly the supplied fields.
    ///
    /// Fails with `EmptyUpdate` when the patch carries nothing and with
    /// `NotFound` when the id matches no row.
    fn update(&self, id: AppointmentId, patch: &AppointmentPatch) -> RepoResult<()>;
}

/// SQLite-backed appointment repository.
pub struct SqliteAppointmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAppointmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_rows(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut appointments = Vec::new();
        while let Some(row) = rows.next()? {
            appointments.push(parse_appointment_row(row)?);
        }
        Ok(appointments)
    }
}

impl AppointmentRepository for SqliteAppointmentRepository<'_> {
    fn add(&self, appointment: &NewAppointment) -> RepoResult<AppointmentId> {
        self.conn.execute(
            "INSERT INTO appointments (
                patient_id,
                doctor_id,
                appointment_date,
                reason,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.appointment_date.format("%Y-%m-%d").to_string(),
                appointment.reason.as_str(),
                appointment.status.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: AppointmentId) -> RepoResult<Option<Appointment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{APPOINTMENT_SELECT_SQL} WHERE a.appointment_id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_appointment_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Appointment>> {
        self.query_rows(
            &format!(
                "{APPOINTMENT_SELECT_SQL} ORDER BY a.appointment_date {}, a.appointment_id ASC;",
                order.as_sql()
            ),
            &[],
        )
    }

    fn find_by_patient(&self, patient_id: i64) -> RepoResult<Vec<Appointment>> {
        self.query_rows(
            &format!(
                "{APPOINTMENT_SELECT_SQL} WHERE a.patient_id = ?1 ORDER BY a.appointment_date ASC;"
            ),
            &[&patient_id],
        )
    }

    fn find_by_doctor(&self, doctor_id: i64) -> RepoResult<Vec<Appointment>> {
        self.query_rows(
            &format!(
                "{APPOINTMENT_SELECT_SQL} WHERE a.doctor_id = ?1 ORDER BY a.appointment_date ASC;"
            ),
            &[&doctor_id],
        )
    }

    fn list_on(&self, date: NaiveDate) -> RepoResult<Vec<Appointment>> {
        let date_text = date.format("%Y-%m-%d").to_string();
        self.query_rows(
            &format!(
                "{APPOINTMENT_SELECT_SQL} WHERE a.appointment_date = ?1 ORDER BY a.status ASC;"
            ),
            &[&date_text],
        )
    }

    fn update(&self, id: AppointmentId, patch: &AppointmentPatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Err(RepoError::EmptyUpdate);
        }

        // SET list is assembled from the typed patch fields only; values
        // are always bound, never interpolated.
        let mut sets: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(patient_id) = patch.patient_id {
            sets.push("patient_id = ?");
            bind_values.push(Value::Integer(patient_id));
        }
        if let Some(doctor_id) = patch.doctor_id {
            sets.push("doctor_id = ?");
            bind_values.push(match doctor_id {
                Some(id) => Value::Integer(id),
                None => Value::Null,
            });
        }
        if let Some(date) = patch.appointment_date {
            sets.push("appointment_date = ?");
            bind_values.push(Value::Text(date.format("%Y-%m-%d").to_string()));
        }
        if let Some(reason) = &patch.reason {
            sets.push("reason = ?");
            bind_values.push(Value::Text(reason.clone()));
        }
        if let Some(status) = patch.status {
            sets.push("status = ?");
            bind_values.push(Value::Text(status.as_str().to_string()));
        }

        let sql = format!(
            "UPDATE appointments
             SET {}, updated_at = (strftime('%s', 'now') * 1000)
             WHERE appointment_id = ?;",
            sets.join(", ")
        );
        bind_values.push(Value::Integer(id));

        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_appointment_row(row: &Row<'_>) -> RepoResult<Appointment> {
    let date_text: String = row.get("appointment_date")?;
    let appointment_date = parse_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date value `{date_text}` in appointments.appointment_date"
        ))
    })?;

    let status_text: String = row.get("status")?;
    let status = AppointmentStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status value `{status_text}` in appointments.status"
        ))
    })?;

    Ok(Appointment {
        appointment_id: row.get("appointment_id")?,
        patient_id: row.get("patient_id")?,
        patient_name: row.get("patient_name")?,
        doctor_id: row.get("doctor_id")?,
        doctor_name: row.get("doctor_name")?,
        appointment_date,
        reason: row.get("reason")?,
        status,
    })
}
