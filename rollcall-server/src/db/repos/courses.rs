//! Course repository
//!
//! Mirrors the student repository: UNIQUE(course_code) violations become
//! `Duplicate`, and delete removes enrollments in the same transaction.

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Course, CourseUpdate, NewCourse, Student};

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every course in insertion order.
    pub async fn list(&self) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT course_id, course_code, course_name, course_description
            FROM course
            ORDER BY course_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = courses.len(), "listed courses");
        Ok(courses)
    }

    /// Get a single course by id.
    pub async fn get(&self, course_id: i64) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT course_id, course_code, course_name, course_description
            FROM course
            WHERE course_id = ?
            "#,
        )
        .bind(course_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("course", course_id))
    }

    /// Insert a course. An existing code yields `DbError::Duplicate`.
    pub async fn create(&self, new: NewCourse) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO course (course_code, course_name, course_description)
            VALUES (?, ?, ?)
            RETURNING course_id, course_code, course_name, course_description
            "#,
        )
        .bind(&new.course_code)
        .bind(&new.course_name)
        .bind(new.course_description.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "course", &new.course_code))?;

        tracing::info!(
            course_id = course.course_id,
            course_code = %course.course_code,
            "created course"
        );
        Ok(course)
    }

    /// Overwrite name and description.
    pub async fn update(&self, course_id: i64, update: CourseUpdate) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE course
            SET course_name = ?, course_description = ?
            WHERE course_id = ?
            RETURNING course_id, course_code, course_name, course_description
            "#,
        )
        .bind(&update.course_name)
        .bind(update.course_description.as_deref())
        .bind(course_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("course", course_id))?;

        tracing::info!(course_id, "updated course");
        Ok(course)
    }

    /// Delete a course together with all of its enrollments.
    pub async fn delete(&self, course_id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let enrollments = sqlx::query("DELETE FROM enrollments WHERE ecourse_id = ?")
            .bind(course_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM course WHERE course_id = ?")
            .bind(course_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(DbError::not_found("course", course_id));
        }

        tx.commit().await?;

        tracing::info!(course_id, enrollments, "deleted course");
        Ok(())
    }

    /// Students enrolled in the course.
    pub async fn students(&self, course_id: i64) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT s.student_id, s.roll_number, s.first_name, s.last_name
            FROM student s
            JOIN enrollments e ON e.estudent_id = s.student_id
            WHERE e.ecourse_id = ?
            ORDER BY s.student_id
            "#,
        )
        .bind(course_id)
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }
}
