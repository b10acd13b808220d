//! Student repository
//!
//! - create: plain INSERT, UNIQUE(roll_number) violations become `Duplicate`
//! - update: field overwrite and optional course link in one transaction
//! - delete: enrollments and the student row removed in one transaction

use sqlx::SqlitePool;

use super::enrollments::{ensure_course, insert_link};
use super::DbError;
use crate::models::{Course, NewStudent, Student, StudentUpdate};

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every student in insertion order.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, roll_number, first_name, last_name
            FROM student
            ORDER BY student_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        tracing::debug!(count = students.len(), "listed students");
        Ok(students)
    }

    /// Get a single student by id.
    pub async fn get(&self, student_id: i64) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT student_id, roll_number, first_name, last_name
            FROM student
            WHERE student_id = ?
            "#,
        )
        .bind(student_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("student", student_id))
    }

    /// Insert a student. An existing roll number yields `DbError::Duplicate`
    /// and leaves the table unchanged.
    pub async fn create(&self, new: NewStudent) -> Result<Student, DbError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO student (roll_number, first_name, last_name)
            VALUES (?, ?, ?)
            RETURNING student_id, roll_number, first_name, last_name
            "#,
        )
        .bind(&new.roll_number)
        .bind(&new.first_name)
        .bind(new.last_name.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "student", &new.roll_number))?;

        tracing::info!(
            student_id = student.student_id,
            roll_number = %student.roll_number,
            name = %student.full_name(),
            "created student"
        );
        Ok(student)
    }

    /// Overwrite name fields and, if a course is selected, enroll in it.
    ///
    /// Runs in one transaction: a missing student or course commits nothing.
    pub async fn update(&self, student_id: i64, update: StudentUpdate) -> Result<Student, DbError> {
        let mut tx = self.pool.begin().await?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE student
            SET first_name = ?, last_name = ?
            WHERE student_id = ?
            RETURNING student_id, roll_number, first_name, last_name
            "#,
        )
        .bind(&update.first_name)
        .bind(update.last_name.as_deref())
        .bind(student_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("student", student_id))?;

        if let Some(course_id) = update.course_id {
            ensure_course(&mut *tx, course_id).await?;
            insert_link(&mut *tx, student_id, course_id).await?;
        }

        tx.commit().await?;

        tracing::info!(student_id, course_id = ?update.course_id, "updated student");
        Ok(student)
    }

    /// Delete a student together with all of its enrollments.
    pub async fn delete(&self, student_id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let enrollments = sqlx::query("DELETE FROM enrollments WHERE estudent_id = ?")
            .bind(student_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM student WHERE student_id = ?")
            .bind(student_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            // Dropping the transaction rolls back the enrollment delete
            return Err(DbError::not_found("student", student_id));
        }

        tx.commit().await?;

        tracing::info!(student_id, enrollments, "deleted student");
        Ok(())
    }

    /// Courses the student is enrolled in.
    pub async fn courses(&self, student_id: i64) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.course_id, c.course_code, c.course_name, c.course_description
            FROM course c
            JOIN enrollments e ON e.ecourse_id = c.course_id
            WHERE e.estudent_id = ?
            ORDER BY c.course_id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{CourseRepo, EnrollmentRepo};
    use crate::db::test_pool;
    use crate::models::NewCourse;

    fn ann() -> NewStudent {
        NewStudent {
            roll_number: "R1".into(),
            first_name: "Ann".into(),
            last_name: None,
        }
    }

    fn course(code: &str) -> NewCourse {
        NewCourse {
            course_code: code.into(),
            course_name: format!("{code} name"),
            course_description: None,
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = test_pool().await;
        let repo = StudentRepo::new(&pool);

        let created = repo.create(ann()).await.unwrap();
        let fetched = repo.get(created.student_id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.last_name, None);
    }

    #[tokio::test]
    async fn duplicate_roll_number_rejected() {
        let pool = test_pool().await;
        let repo = StudentRepo::new(&pool);
        repo.create(ann()).await.unwrap();

        let mut again = ann();
        again.first_name = "Someone else".into();
        let err = repo.create(again).await.unwrap_err();

        assert!(matches!(err, DbError::Duplicate { resource: "student", ref key } if key == "R1"));
        let students = repo.list().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].first_name, "Ann");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let err = StudentRepo::new(&pool).get(404).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", .. }));
    }

    #[tokio::test]
    async fn update_enrolls_in_both_directions() {
        let pool = test_pool().await;
        let students = StudentRepo::new(&pool);
        let courses = CourseRepo::new(&pool);

        let s = students.create(ann()).await.unwrap();
        let c = courses.create(course("C1")).await.unwrap();

        let updated = students
            .update(
                s.student_id,
                StudentUpdate {
                    first_name: "Anne".into(),
                    last_name: Some("Lee".into()),
                    course_id: Some(c.course_id),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Anne");
        assert_eq!(updated.last_name.as_deref(), Some("Lee"));
        assert_eq!(updated.roll_number, "R1");

        let rows = EnrollmentRepo::new(&pool).list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].estudent_id, rows[0].ecourse_id), (s.student_id, c.course_id));

        assert_eq!(students.courses(s.student_id).await.unwrap(), vec![c.clone()]);
        assert_eq!(courses.students(c.course_id).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_with_missing_course_commits_nothing() {
        let pool = test_pool().await;
        let repo = StudentRepo::new(&pool);
        let s = repo.create(ann()).await.unwrap();

        let err = repo
            .update(
                s.student_id,
                StudentUpdate {
                    first_name: "Changed".into(),
                    last_name: None,
                    course_id: Some(77),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { resource: "course", .. }));
        assert_eq!(repo.get(s.student_id).await.unwrap().first_name, "Ann");
    }

    #[tokio::test]
    async fn update_missing_student_is_not_found() {
        let pool = test_pool().await;
        let err = StudentRepo::new(&pool)
            .update(
                9,
                StudentUpdate {
                    first_name: "Nobody".into(),
                    last_name: None,
                    course_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", .. }));
    }

    #[tokio::test]
    async fn delete_cascades_enrollments() {
        let pool = test_pool().await;
        let students = StudentRepo::new(&pool);
        let courses = CourseRepo::new(&pool);
        let enrollments = EnrollmentRepo::new(&pool);

        let s = students.create(ann()).await.unwrap();
        let other = students
            .create(NewStudent {
                roll_number: "R2".into(),
                first_name: "Bob".into(),
                last_name: None,
            })
            .await
            .unwrap();
        let c1 = courses.create(course("C1")).await.unwrap();
        let c2 = courses.create(course("C2")).await.unwrap();
        enrollments.link(s.student_id, c1.course_id).await.unwrap();
        enrollments.link(s.student_id, c2.course_id).await.unwrap();
        enrollments.link(other.student_id, c1.course_id).await.unwrap();

        students.delete(s.student_id).await.unwrap();

        assert!(matches!(
            students.get(s.student_id).await,
            Err(DbError::NotFound { .. })
        ));
        let rows = enrollments.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].estudent_id, other.student_id);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let err = StudentRepo::new(&pool).delete(5).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "student", .. }));
    }
}
