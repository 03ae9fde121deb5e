use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chatterbox::{config::Config, create_app, database, database::MIGRATOR};
use clap::Parser;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tempfile::TempDir;
use tower::ServiceExt;

/// In-memory database with the schema applied.
///
/// Every connection to `sqlite::memory:` is its own database, so the pool is
/// pinned to a single connection that is never recycled.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Database file in a temporary directory, opened the way the server opens it.
///
/// The directory is removed when the returned guard is dropped.
pub async fn file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("messages.db").display());
    let max_connections = max_connections.to_string();

    let config = Config::try_parse_from([
        "chatterbox",
        "--database-url",
        &url,
        "--max-connections",
        &max_connections,
    ])
    .expect("invalid test config");
    let pool = database::connect(&config)
        .await
        .expect("failed to open database file");

    (dir, pool)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

impl TestResponse {
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.body.clone()).expect("unexpected response shape")
    }
}

#[derive(Clone)]
pub struct TestApp {
    pub pool: SqlitePool,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_pool(test_pool().await)
    }

    pub fn with_pool(pool: SqlitePool) -> Self {
        let router = create_app(pool.clone());
        Self { pool, router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response is not JSON")
        };

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn json(&self, method: Method, uri: &str, payload: Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &'static str,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    pub async fn empty(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}
