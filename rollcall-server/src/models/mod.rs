//! Domain records and the form payloads that create or change them
//!
//! Records derive `FromRow` for the repositories and `Serialize` for the
//! templates. Form types convert into the repository inputs; the only
//! coercion performed is number parsing and blank-to-NULL for optional text.

pub mod course;
pub mod enrollment;
pub mod form;
pub mod student;
pub mod validation;

pub use course::{Course, CourseUpdate, NewCourse};
pub use enrollment::Enrollment;
pub use form::{CreateCourseForm, CreateStudentForm, UpdateCourseForm, UpdateStudentForm};
pub use student::{NewStudent, Student, StudentUpdate};
pub use validation::ValidationError;
