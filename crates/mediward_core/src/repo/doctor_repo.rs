//! Doctor repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/list APIs over the `doctors` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Inserts trust their input; fields were validated at intake.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::doctor::{Doctor, DoctorId, NewDoctor};
use crate::repo::{RepoError, RepoResult, SortOrder};
use rusqlite::{params, Connection, Row};

const DOCTOR_SELECT_SQL: &str = "SELECT
    doctor_id,
    full_name,
    specialization,
    phone_number,
    email,
    years_of_experience
FROM doctors";

/// Repository interface for doctor records.
pub trait DoctorRepository {
    /// Inserts a new doctor and returns the storage-assigned id.
    fn add(&self, doctor: &NewDoctor) -> RepoResult<DoctorId>;
    /// Gets zero or one doctor by id.
    fn find_by_id(&self, id: DoctorId) -> RepoResult<Option<Doctor>>;
    /// Substring match against the full name, ordered by name.
    fn find_by_name_contains(&self, needle: &str, order: SortOrder) -> RepoResult<Vec<Doctor>>;
    /// Lists every doctor ordered by name.
    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Doctor>>;
    /// Lists every doctor ordered by years of experience.
    fn list_by_experience(&self, order: SortOrder) -> RepoResult<Vec<Doctor>>;
    /// Returns the stored full names, used for the advisory duplicate check.
    fn list_existing_names(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed doctor repository.
pub struct SqliteDoctorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDoctorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_ordered(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> RepoResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut doctors = Vec::new();
        while let Some(row) = rows.next()? {
            doctors.push(parse_doctor_row(row)?);
        }
        Ok(doctors)
    }
}

impl DoctorRepository for SqliteDoctorRepository<'_> {
    fn add(&self, doctor: &NewDoctor) -> RepoResult<DoctorId> {
        self.conn.execute(
            "INSERT INTO doctors (
                full_name,
                specialization,
                phone_number,
                email,
                years_of_experience
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                doctor.full_name.as_str(),
                doctor.specialization.as_deref(),
                doctor.phone_number.as_deref(),
                doctor.email.as_deref(),
                doctor.years_of_experience,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_id(&self, id: DoctorId) -> RepoResult<Option<Doctor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DOCTOR_SELECT_SQL} WHERE doctor_id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_doctor_row(row)?));
        }

        Ok(None)
    }

    fn find_by_name_contains(&self, needle: &str, order: SortOrder) -> RepoResult<Vec<Doctor>> {
        let like = format!("%{needle}%");
        self.query_ordered(
            &format!(
                "{DOCTOR_SELECT_SQL} WHERE full_name LIKE ?1 ORDER BY full_name {};",
                order.as_sql()
            ),
            &[&like],
        )
    }

    fn list_all(&self, order: SortOrder) -> RepoResult<Vec<Doctor>> {
        self.query_ordered(
            &format!("{DOCTOR_SELECT_SQL} ORDER BY full_name {};", order.as_sql()),
            &[],
        )
    }

    fn list_by_experience(&self, order: SortOrder) -> RepoResult<Vec<Doctor>> {
        self.query_ordered(
            &format!(
                "{DOCTOR_SELECT_SQL} ORDER BY years_of_experience {}, full_name ASC;",
                order.as_sql()
            ),
            &[],
        )
    }

    fn list_existing_names(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT full_name FROM doctors;")?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get(0)?);
        }
        Ok(names)
    }
}

fn parse_doctor_row(row: &Row<'_>) -> RepoResult<Doctor> {
    let years: i64 = row.get("years_of_experience")?;
    let years_of_experience = u32::try_from(years).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid experience value `{years}` in doctors.years_of_experience"
        ))
    })?;

    Ok(Doctor {
        doctor_id: row.get("doctor_id")?,
        full_name: row.get("full_name")?,
        specialization: row.get("specialization")?,
        phone_number: row.get("phone_number")?,
        email: row.get("email")?,
        years_of_experience,
    })
}
