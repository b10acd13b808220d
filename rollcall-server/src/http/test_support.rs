//! Router harness for handler tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceExt;

use super::server::{build_router, AppState};
use crate::db::test_pool;

/// A router over a fresh in-memory database
pub(crate) struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = test_pool().await;
        let router = build_router(AppState { pool: pool.clone() });
        Self { pool, router }
    }

    pub async fn get_raw(&self, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_raw(&self, uri: &str, form: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        read(self.get_raw(uri).await).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, String) {
        read(self.post_raw(uri, form).await).await
    }
}

async fn read(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
