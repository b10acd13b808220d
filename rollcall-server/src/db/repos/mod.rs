//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Lookups by id return `DbError::NotFound` instead of an empty result
//! - Inserts rely on UNIQUE constraints and map violations to `DbError::Duplicate`
//! - Uses transactions for multi-step operations

pub mod courses;
pub mod enrollments;
pub mod students;

pub use courses::CourseRepo;
pub use enrollments::EnrollmentRepo;
pub use students::StudentRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate: {resource} '{key}' already exists")]
    Duplicate { resource: &'static str, key: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify an INSERT failure: UNIQUE violations become `Duplicate`.
    pub(crate) fn from_insert(err: sqlx::Error, resource: &'static str, key: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::Duplicate {
                resource,
                key: key.to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}
