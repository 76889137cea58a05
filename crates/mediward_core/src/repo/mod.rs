//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per entity.
//! - Isolate SQLite query details from service/menu orchestration.
//!
//! # Invariants
//! - Repositories trust fully-validated input: field validation happens at
//!   the intake boundary, never here.
//! - Repository APIs return semantic errors (`NotFound`, `EmptyUpdate`) in
//!   addition to DB transport errors.
//! - Lookups that match nothing are empty results, not errors.

pub mod appointment_repo;
pub mod doctor_repo;
pub mod patient_repo;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(i64),
    InvalidData(String),
    EmptyUpdate,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::EmptyUpdate => write!(f, "update carries no fields to change"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::EmptyUpdate => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Sort direction applied to the name column (doctors, patients) or the
/// date column (appointments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the SQL keyword for this direction.
    ///
    /// Direction is interpolated as a keyword because SQL parameters cannot
    /// bind into ORDER BY; the value set is closed so this stays safe.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
