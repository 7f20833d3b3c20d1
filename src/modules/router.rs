use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{advertisement, user};
use crate::{types::Context, utils::error::Error};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "Welcome to the Adboard API" })),
    )
}

async fn fallback() -> Error {
    Error::RouteNotFound
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/adv", advertisement::get_router())
        .nest("/user", user::get_router())
        .fallback(fallback)
}
