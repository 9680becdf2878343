#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use quotecard::{routes, storage, Data};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use tower::ServiceExt;

pub const PASSWORD: &str = "hunter2";

/// A migrated, empty in-memory database. A single connection that never expires keeps the
/// data alive for the whole test.
pub async fn memory_db() -> Pool<Sqlite> {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    storage::MIGRATOR.run(&db).await.unwrap();
    db
}

pub async fn app_with_password(password: Option<&str>) -> (Router, Pool<Sqlite>) {
    let db = memory_db().await;
    let app = routes::build_router(Data::new(db.clone(), password.map(String::from)));
    (app, db)
}

pub async fn app() -> (Router, Pool<Sqlite>) {
    app_with_password(Some(PASSWORD)).await
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers.get(name).unwrap().to_str().unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// Sends `body` as JSON, with the `api-password` header when `password` is given.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    password: Option<&str>,
    body: &str,
) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(password) = password {
        builder = builder.header("api-password", password);
    }

    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str, password: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);

    if let Some(password) = password {
        builder = builder.header("api-password", password);
    }

    send(app, builder.body(Body::empty()).unwrap()).await
}
