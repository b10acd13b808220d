//! Course pages

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use minijinja::context;

use crate::db::repos::CourseRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::views;
use crate::models::{CreateCourseForm, UpdateCourseForm};

/// GET|POST /courses
async fn list_courses(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let courses = CourseRepo::new(&state.pool).list().await?;

    if courses.is_empty() {
        return views::render("no_courses.html", context! {});
    }
    views::render("course_list.html", context! { courses })
}

/// GET /course/create
async fn new_course_form() -> Result<Html<String>, ApiError> {
    views::render("add_course.html", context! {})
}

/// POST /course/create
async fn create_course(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateCourseForm>,
) -> Result<Redirect, ApiError> {
    CourseRepo::new(&state.pool).create(form.into()).await?;
    Ok(Redirect::to("/courses"))
}

/// GET /course/{id} - detail with enrolled students
async fn show_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let repo = CourseRepo::new(&state.pool);
    let course = repo.get(course_id).await?;
    let students = repo.students(course_id).await?;

    views::render("course_detail.html", context! { course, students })
}

/// GET /course/{id}/update
async fn edit_course_form(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let course = CourseRepo::new(&state.pool).get(course_id).await?;
    views::render("update_course.html", context! { course })
}

/// POST /course/{id}/update
async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
    Form(form): Form<UpdateCourseForm>,
) -> Result<Redirect, ApiError> {
    CourseRepo::new(&state.pool).update(course_id, form.into()).await?;
    Ok(Redirect::to("/courses"))
}

/// GET|POST /course/{id}/delete
async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<i64>,
) -> Result<Redirect, ApiError> {
    CourseRepo::new(&state.pool).delete(course_id).await?;
    Ok(Redirect::to("/courses"))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", get(list_courses).post(list_courses))
        .route("/course/create", get(new_course_form).post(create_course))
        .route("/course/{id}", get(show_course))
        .route("/course/{id}/update", get(edit_course_form).post(update_course))
        .route("/course/{id}/delete", get(delete_course).post(delete_course))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use crate::db::repos::{CourseRepo, EnrollmentRepo, StudentRepo};
    use crate::http::test_support::TestApp;
    use crate::models::NewStudent;

    const CS101: &str = "code=CS101&c_name=Intro&desc=basics";

    #[tokio::test]
    async fn empty_list_shows_no_courses_page() {
        let app = TestApp::new().await;
        let (status, body) = app.get("/courses").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No courses found"));
    }

    #[tokio::test]
    async fn duplicate_create_keeps_single_listing() {
        let app = TestApp::new().await;

        let response = app.post_raw("/course/create", CS101).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/courses");

        let (status, body) = app.post_form("/course/create", CS101).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Course already exists"));

        let (_, listing) = app.get("/courses").await;
        assert_eq!(listing.matches(">CS101<").count(), 1);
        assert_eq!(CourseRepo::new(&app.pool).list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_form_prefills_and_post_overwrites() {
        let app = TestApp::new().await;
        app.post_form("/course/create", CS101).await;
        let id = CourseRepo::new(&app.pool).list().await.unwrap()[0].course_id;

        let (status, form) = app.get(&format!("/course/{id}/update")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(form.contains(r#"value="Intro""#));

        let response = app
            .post_raw(&format!("/course/{id}/update"), "c_name=Introduction&desc=")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let course = CourseRepo::new(&app.pool).get(id).await.unwrap();
        assert_eq!(course.course_name, "Introduction");
        assert_eq!(course.course_description, None);
        assert_eq!(course.course_code, "CS101");
    }

    #[tokio::test]
    async fn detail_lists_enrolled_students() {
        let app = TestApp::new().await;
        app.post_form("/course/create", CS101).await;
        let course_id = CourseRepo::new(&app.pool).list().await.unwrap()[0].course_id;
        let student = StudentRepo::new(&app.pool)
            .create(NewStudent {
                roll_number: "R1".into(),
                first_name: "Ann".into(),
                last_name: None,
            })
            .await
            .unwrap();
        EnrollmentRepo::new(&app.pool)
            .link(student.student_id, course_id)
            .await
            .unwrap();

        let (status, body) = app.get(&format!("/course/{course_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("R1"));
        assert!(body.contains("basics"));
    }

    #[tokio::test]
    async fn delete_removes_course_and_enrollments() {
        let app = TestApp::new().await;
        app.post_form("/course/create", CS101).await;
        let course_id = CourseRepo::new(&app.pool).list().await.unwrap()[0].course_id;
        let student = StudentRepo::new(&app.pool)
            .create(NewStudent {
                roll_number: "R1".into(),
                first_name: "Ann".into(),
                last_name: None,
            })
            .await
            .unwrap();
        EnrollmentRepo::new(&app.pool)
            .link(student.student_id, course_id)
            .await
            .unwrap();

        let response = app.get_raw(&format!("/course/{course_id}/delete")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert!(CourseRepo::new(&app.pool).list().await.unwrap().is_empty());
        assert!(EnrollmentRepo::new(&app.pool).list().await.unwrap().is_empty());
        assert_eq!(StudentRepo::new(&app.pool).list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_course_is_404() {
        let app = TestApp::new().await;
        assert_eq!(app.get("/course/8").await.0, StatusCode::NOT_FOUND);
        assert_eq!(
            app.post_form("/course/8/update", "c_name=x&desc=").await.0,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::new().await;
        assert_eq!(app.get("/course/abc").await.0, StatusCode::BAD_REQUEST);
    }
}
