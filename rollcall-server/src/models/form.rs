//! HTML form payloads
//!
//! Field names match the `name` attributes in the templates.

use serde::Deserialize;

use super::{CourseUpdate, NewCourse, NewStudent, StudentUpdate, ValidationError};

/// POST /student/create
#[derive(Debug, Deserialize)]
pub struct CreateStudentForm {
    pub roll: String,
    pub f_name: String,
    #[serde(default)]
    pub l_name: Option<String>,
}

/// POST /student/{id}/update
#[derive(Debug, Deserialize)]
pub struct UpdateStudentForm {
    pub f_name: String,
    #[serde(default)]
    pub l_name: Option<String>,
    /// Selected course id; blank means "enroll in nothing"
    #[serde(default)]
    pub course: Option<String>,
}

/// POST /course/create
#[derive(Debug, Deserialize)]
pub struct CreateCourseForm {
    pub code: String,
    pub c_name: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// POST /course/{id}/update
#[derive(Debug, Deserialize)]
pub struct UpdateCourseForm {
    pub c_name: String,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Blank optional text is stored as NULL
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CreateStudentForm> for NewStudent {
    fn from(form: CreateStudentForm) -> Self {
        Self {
            roll_number: form.roll,
            first_name: form.f_name,
            last_name: optional_text(form.l_name),
        }
    }
}

impl TryFrom<UpdateStudentForm> for StudentUpdate {
    type Error = ValidationError;

    fn try_from(form: UpdateStudentForm) -> Result<Self, Self::Error> {
        let course_id = match optional_text(form.course) {
            Some(raw) => Some(raw.trim().parse::<i64>().map_err(|_| {
                ValidationError::NotAnId {
                    field: "course",
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            first_name: form.f_name,
            last_name: optional_text(form.l_name),
            course_id,
        })
    }
}

impl From<CreateCourseForm> for NewCourse {
    fn from(form: CreateCourseForm) -> Self {
        Self {
            course_code: form.code,
            course_name: form.c_name,
            course_description: optional_text(form.desc),
        }
    }
}

impl From<UpdateCourseForm> for CourseUpdate {
    fn from(form: UpdateCourseForm) -> Self {
        Self {
            course_name: form.c_name,
            course_description: optional_text(form.desc),
        }
    }
}
