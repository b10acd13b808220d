//! Student records

use serde::Serialize;
use sqlx::FromRow;

/// Student row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub student_id: i64,
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl Student {
    /// First and last name joined for display
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// Input for inserting a student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

/// Mutable student fields plus an optional course to enroll in
#[derive(Debug, Clone)]
pub struct StudentUpdate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub course_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_missing_last_name() {
        let mut student = Student {
            student_id: 1,
            roll_number: "R1".into(),
            first_name: "Ann".into(),
            last_name: None,
        };
        assert_eq!(student.full_name(), "Ann");

        student.last_name = Some("Lee".into());
        assert_eq!(student.full_name(), "Ann Lee");
    }
}
