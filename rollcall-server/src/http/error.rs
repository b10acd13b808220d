//! API error types with IntoResponse
//!
//! Errors are rendered as HTML pages with appropriate status codes. A
//! duplicate business key is an expected outcome, not a failure: it renders
//! the "already exists" view with 200, like any other page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use super::views;
use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Form input could not be coerced (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Business key already taken (200, "already exists" view)
    Duplicate { resource: &'static str, key: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Template rendering failed (500, logged)
    Render(minijinja::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::OK,
            Self::Database(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(&self) -> Result<String, minijinja::Error> {
        let status = self.status();
        match self {
            Self::Duplicate { resource, key } => {
                let (key_label, back) = match *resource {
                    "student" => ("roll number", "/student/create"),
                    _ => ("code", "/course/create"),
                };
                views::render_string(
                    "exists.html",
                    context! { resource, key, key_label, back },
                )
            }
            Self::Validation(e) => error_page(status, &e.to_string()),
            Self::NotFound { resource, id } => {
                error_page(status, &format!("{} '{}' not found", resource, id))
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                error_page(status, "an internal error occurred")
            }
            Self::Render(e) => {
                tracing::error!("Template error: {:#}", e);
                error_page(status, "an internal error occurred")
            }
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Result<String, minijinja::Error> {
    views::render_string(
        "error.html",
        context! { status => status.to_string(), message },
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.page() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:#}", e);
                (status, status.to_string()).into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Duplicate { resource, key } => Self::Duplicate { resource, key },
            _ => Self::Database(e),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::NotAnId {
            field: "course",
            value: "x".into(),
        });
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("course must be a numeric id"));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err: ApiError = DbError::NotFound {
            resource: "student",
            id: "9".into(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("student &#x27;9&#x27; not found") || body.contains("student '9' not found"));
    }

    #[tokio::test]
    async fn duplicate_renders_exists_view() {
        let err: ApiError = DbError::Duplicate {
            resource: "student",
            key: "R1".into(),
        }
        .into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Student already exists"));
        assert!(body.contains("roll number"));
    }

    #[tokio::test]
    async fn database_error_is_generic_500() {
        let err: ApiError = DbError::Sqlx(sqlx::Error::PoolTimedOut).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("an internal error occurred"));
        assert!(!body.contains("PoolTimedOut"));
    }
}
