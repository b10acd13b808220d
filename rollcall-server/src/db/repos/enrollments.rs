//! Enrollment repository
//!
//! The enrollment table is the only store of the student/course relation.
//! Both directions (a student's courses, a course's students) are derived
//! from it by JOIN, so one `link` writes exactly one row.

use sqlx::{SqliteConnection, SqlitePool};

use super::DbError;
use crate::models::Enrollment;

/// Enrollment repository
pub struct EnrollmentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EnrollmentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Enroll a student in a course.
    ///
    /// Returns `true` if a new row was written, `false` if the pair was
    /// already linked.
    pub async fn link(&self, student_id: i64, course_id: i64) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        ensure_student(&mut *tx, student_id).await?;
        ensure_course(&mut *tx, course_id).await?;
        let inserted = insert_link(&mut *tx, student_id, course_id).await?;

        tx.commit().await?;
        Ok(inserted)
    }

    /// Remove every enrollment row for the pair. Zero matches is not an error.
    pub async fn withdraw(&self, student_id: i64, course_id: i64) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM enrollments WHERE estudent_id = ? AND ecourse_id = ?")
            .bind(student_id)
            .bind(course_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::info!(student_id, course_id, removed, "withdrew enrollment");
        Ok(removed)
    }

    /// All enrollment rows, oldest first.
    pub async fn list(&self) -> Result<Vec<Enrollment>, DbError> {
        let rows = sqlx::query_as::<_, Enrollment>(
            "SELECT enrollment_id, estudent_id, ecourse_id FROM enrollments ORDER BY enrollment_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

/// Insert the join row inside an open transaction.
///
/// The UNIQUE (estudent_id, ecourse_id) constraint turns a repeated link
/// into a no-op.
pub(crate) async fn insert_link(
    conn: &mut SqliteConnection,
    student_id: i64,
    course_id: i64,
) -> Result<bool, DbError> {
    let result = sqlx::query(
        r#"
        INSERT INTO enrollments (estudent_id, ecourse_id)
        VALUES (?, ?)
        ON CONFLICT (estudent_id, ecourse_id) DO NOTHING
        "#,
    )
    .bind(student_id)
    .bind(course_id)
    .execute(&mut *conn)
    .await?;

    let inserted = result.rows_affected() == 1;
    tracing::info!(student_id, course_id, inserted, "linked student to course");
    Ok(inserted)
}

pub(crate) async fn ensure_student(conn: &mut SqliteConnection, student_id: i64) -> Result<(), DbError> {
    let (exists,): (i64,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM student WHERE student_id = ?)")
            .bind(student_id)
            .fetch_one(&mut *conn)
            .await?;

    if exists != 0 {
        Ok(())
    } else {
        Err(DbError::not_found("student", student_id))
    }
}

pub(crate) async fn ensure_course(conn: &mut SqliteConnection, course_id: i64) -> Result<(), DbError> {
    let (exists,): (i64,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM course WHERE course_id = ?)")
            .bind(course_id)
            .fetch_one(&mut *conn)
            .await?;

    if exists != 0 {
        Ok(())
    } else {
        Err(DbError::not_found("course", course_id))
    }
}
