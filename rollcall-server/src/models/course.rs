//! Course records

use serde::Serialize;
use sqlx::FromRow;

/// Course row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Course {
    pub course_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

/// Input for inserting a course
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

/// Mutable course fields. The code is a business key and never changes.
#[derive(Debug, Clone)]
pub struct CourseUpdate {
    pub course_name: String,
    pub course_description: Option<String>,
}
