//! Student pages
//!
//! Mutations answer with a redirect to the student list at `/`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use minijinja::context;

use crate::db::repos::{CourseRepo, StudentRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{CreateStudentForm, StudentUpdate, UpdateStudentForm};

/// GET|POST / - list students, or the "no students" page
async fn list_students(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;

    if students.is_empty() {
        return views::render("no_students.html", context! {});
    }
    views::render("student_list.html", context! { students })
}

/// GET /student/create
async fn new_student_form() -> Result<Html<String>, ApiError> {
    views::render("add_student.html", context! {})
}

/// POST /student/create
async fn create_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateStudentForm>,
) -> Result<Redirect, ApiError> {
    StudentRepo::new(&state.pool).create(form.into()).await?;
    Ok(Redirect::to("/"))
}

/// GET /student/{id} - detail with enrolled courses
async fn show_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let repo = StudentRepo::new(&state.pool);
    let student = repo.get(student_id).await?;
    let courses = repo.courses(student_id).await?;

    views::render("student_detail.html", context! { student, courses })
}

/// GET /student/{id}/update - form listing every course to enroll in
async fn edit_student_form(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(student_id).await?;
    let courses = CourseRepo::new(&state.pool).list().await?;

    views::render("update_student.html", context! { student, courses })
}

/// POST /student/{id}/update - overwrite names, enroll in the selected course
async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
    Form(form): Form<UpdateStudentForm>,
) -> Result<Redirect, ApiError> {
    let update = StudentUpdate::try_from(form)?;
    StudentRepo::new(&state.pool).update(student_id, update).await?;
    Ok(Redirect::to("/"))
}

/// GET|POST /student/{id}/delete - delete with its enrollments
async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    StudentRepo::new(&state.pool).delete(student_id).await?;
    Ok(Redirect::to("/"))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_students).post(list_students))
        .route("/student/create", get(new_student_form).post(create_student))
        .route("/student/{id}", get(show_student))
        .route("/student/{id}/update", get(edit_student_form).post(update_student))
        .route("/student/{id}/delete", get(delete_student).post(delete_student))
}
