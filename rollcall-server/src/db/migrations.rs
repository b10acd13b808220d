//! Schema creation for student, course and enrollment tables
//!
//! Every statement is `IF NOT EXISTS`, so running on an existing database is
//! a no-op.

use sqlx::SqlitePool;

/// Create all tables and indexes if absent
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS student (
            student_id INTEGER PRIMARY KEY AUTOINCREMENT,
            roll_number TEXT NOT NULL UNIQUE,
            first_name TEXT NOT NULL,
            last_name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS course (
            course_id INTEGER PRIMARY KEY AUTOINCREMENT,
            course_code TEXT NOT NULL UNIQUE,
            course_name TEXT NOT NULL,
            course_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One row per (student, course) pair; repeated links are no-ops
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS enrollments (
            enrollment_id INTEGER PRIMARY KEY AUTOINCREMENT,
            estudent_id INTEGER NOT NULL REFERENCES student(student_id),
            ecourse_id INTEGER NOT NULL REFERENCES course(course_id),
            UNIQUE (estudent_id, ecourse_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created without the pair constraint get it as a unique index,
    // after collapsing duplicate pairs to their earliest row
    sqlx::query(
        r#"
        DELETE FROM enrollments
        WHERE enrollment_id NOT IN (
            SELECT MIN(enrollment_id) FROM enrollments GROUP BY estudent_id, ecourse_id
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_enrollments_pair ON enrollments(estudent_id, ecourse_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_enrollments_course ON enrollments(ecourse_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}
