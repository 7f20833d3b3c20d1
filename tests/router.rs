//! Requests that are answered by routing, extraction or validation,
//! before any store access.
mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{offline_app, send};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_responds() {
    let app = offline_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn non_integer_ids_never_reach_a_handler() {
    let app = offline_app();

    for (method, uri) in [
        (Method::GET, "/adv/abc"),
        (Method::GET, "/adv/+5"),
        (Method::PATCH, "/adv/1.5"),
        (Method::DELETE, "/user/-3"),
        (Method::GET, "/user/99999999999"),
    ] {
        let body = (method == Method::PATCH).then(|| json!({ "header": "X" }));

        let (status, body) = send(&app, method, uri, body).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            body,
            json!({ "status": "error", "message": "Resource not found" })
        );
    }
}

#[tokio::test]
async fn unknown_paths_get_a_structured_not_found() {
    let app = offline_app();

    let (status, body) = send(&app, Method::GET, "/advertisements/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn unsupported_methods_are_not_allowed() {
    let app = offline_app();

    let (status, _) = send(&app, Method::POST, "/adv/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn create_advertisement_lists_missing_fields() {
    let app = offline_app();

    let (status, body) = send(&app, Method::POST, "/adv", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "message": "Missing required field(s): description, header, owner"
        })
    );
}

#[tokio::test]
async fn create_user_lists_missing_fields() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "name": "A", "password": "p" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required field(s): email");
}

#[tokio::test]
async fn wrongly_typed_create_fields_are_rejected() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/adv",
        Some(json!({ "header": "Bike", "description": "Red", "owner": "me" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = offline_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/user")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_rejected_with_the_error_shape() {
    let app = offline_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/adv")
        .body(Body::from(json!({ "header": "X" }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn patch_rejects_fields_outside_the_allow_list() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/adv/1",
        Some(json!({ "id": 5, "header": "X" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Unknown field(s): id");
}

#[tokio::test]
async fn patch_rejects_mistyped_values() {
    let app = offline_app();

    let (status, body) = send(&app, Method::PATCH, "/user/1", Some(json!({ "email": 5 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}
