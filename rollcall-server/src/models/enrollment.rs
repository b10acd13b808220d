//! Enrollment join rows

use serde::Serialize;
use sqlx::FromRow;

/// Join row linking one student to one course
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct Enrollment {
    pub enrollment_id: i64,
    pub estudent_id: i64,
    pub ecourse_id: i64,
}
