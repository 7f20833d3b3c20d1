use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::extract::{Id, Json},
};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Id(id): Id,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
