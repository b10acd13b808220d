//! Enrollment withdrawal

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::get,
    Router,
};

use crate::db::repos::EnrollmentRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /student/{id}/withdraw/{course_id} - drop every matching enrollment
async fn withdraw(
    State(state): State<Arc<AppState>>,
    Path((student_id, course_id)): Path<(i64, i64)>,
) -> Result<Redirect, ApiError> {
    EnrollmentRepo::new(&state.pool)
        .withdraw(student_id, course_id)
        .await?;
    Ok(Redirect::to("/"))
}

/// Enrollment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/student/{id}/withdraw/{course_id}", get(withdraw))
}
