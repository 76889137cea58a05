//! Patient repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/list APIs over the `patients` table.
//!
//! # Invariants
//! - `date_of_birth` is stored as ISO `YYYY-MM-DD` text; read paths parse
//!   it back and reject values that are not real calendar dates.
//! - `gender` read paths reject values outside the declared enumeration.

use crate::model::patient::{NewPatient, Patient, PatientId};
use crate::model::Gender;
use crate::repo::{RepoError, RepoResult, SortOrder};
use crate::validate::parse_date;
use rusqlite::{params, Connection, Row};

const PATIENT_SELECT_SQL: &str = "SELECT
    patient_id,
    full_name,
    date_of_birth,
    gender,
    address,
    phone_number,
    email
FROM patients";

/// Repository interface for patient records.
pub trait PatientRepository {
    /// Inserts a new patient and returns the storage-assigned id.
    fn add(&self, patient: &NewPatient) -> RepoResult<PatientId>;
    /// Gets zero or one patient by id.
    fn find_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>>;
    /// Substring match against the full name, ordered by name.
    fn find_by_name_contains(&self, needle: &str, order: SortOrder) -> RepoResult<Vec<Patient>>;
    /// Lists every patient ordered by name.
    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Patient>>;
    /// Returns the stored full names, used for the advisory duplicate check.
    fn list_existing_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed patient repository.
pub struct SqlitePatientRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePatientRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_ordered(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> RepoResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut patients = Vec::new();
        while let Some(row) = rows.next()? {
            patients.push(parse_patient_row(row)?);
        }
        Ok(patients)
    }
}

impl PatientRepository for SqlitePatientRepository<'_> {
    fn add(&self, patient: &NewPatient) -> RepoResult<PatientId> {
        self.conn.execute(
            "INSERT INTO patients (
                full_name,
                date_of_birth,
                gender,
                address,
                phone_number,
                email
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                patient.full_name.as_str(),
                patient.date_of_birth.format("%Y-%m-%d").to_string(),
                patient.gender.as_str(),
                patient.address.as_deref(),
                patient.phone_number.as_deref(),
                patient.email.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: PatientId) -> RepoResult<Option<Patient>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PATIENT_SELECT_SQL} WHERE patient_id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_patient_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name_contains(&self, needle: &str, order: SortOrder) -> RepoResult<Vec<Patient>> {
        let like = format!("%{needle}%");
        self.query_ordered(
            &format!(
                "{PATIENT_SELECT_SQL} WHERE full_name LIKE ?1 ORDER BY full_name {};",
                order.as_sql()
            ),
            &[&like],
        )
    }

    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Patient>> {
        self.query_ordered(
            &format!("{PATIENT_SELECT_SQL} ORDER BY full_name {};", order.as_sql()),
            &[],
        )
    }

    fn list_existing_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT full_name FROM patients;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get(0)?);
        }
        Ok(names)
    }
}

fn parse_patient_row(row: &Row<'_>) -> RepoResult<Patient> {
    let dob_text: String = row.get("date_of_birth")?;
    let date_of_birth = parse_date(&dob_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid date value `{dob_text}` in patients.date_of_birth"
        ))
    })?;

    let gender_text: String = row.get("gender")?;
    let gender = Gender::parse(&gender_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid gender value `{gender_text}` in patients.gender"
        ))
    })?;

    Ok(Patient {
        patient_id: row.get("patient_id")?,
        full_name: row.get("full_name")?,
        date_of_birth,
        gender,
        address: row.get("address")?,
        phone_number: row.get("phone_number")?,
        email: row.get("email")?,
    })
}
