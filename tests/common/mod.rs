//! Shared fixtures for driving the full router in-process.
#![allow(dead_code)]

use adboard_backend_rs::{
    app,
    types::{AppContext, Context},
    utils::{
        config::DatabaseConfig,
        database::{self, DatabaseConnection},
    },
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tower::util::ServiceExt;

fn app_context() -> AppContext {
    AppContext {
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

/// Router over a pool that never connects; only usable for requests
/// that are answered before the store is touched.
pub fn offline_app() -> Router {
    let db_conn = database::connect_lazy(&DatabaseConfig {
        user: "adboard".to_string(),
        password: "adboard".to_string(),
        host: "127.0.0.1".to_string(),
        port: 1,
        name: "adboard".to_string(),
        max_connections: 1,
    });

    app::router(Arc::new(Context {
        app: app_context(),
        db_conn,
    }))
}

/// Router over the Postgres database named by `DATABASE_URL`, with tables created.
pub async fn store_app() -> (Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    let db_conn = DatabaseConnection { pool: pool.clone() };

    database::migrate(&db_conn)
        .await
        .expect("Failed to run migrations");

    let router = app::router(Arc::new(Context {
        app: app_context(),
        db_conn,
    }));

    (router, pool)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Email address no other test run has used.
pub fn unique_email(prefix: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}@example.com", prefix, nanos)
}
