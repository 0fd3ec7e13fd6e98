// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Proxy endpoint validation tests
//!
//! Prompt validation runs before any upstream call, so these tests stay
//! offline: a missing or blank prompt must come back as a 400 JSON error
//! body from both proxy endpoints, never as an extractor rejection.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use imagestudio_node::api::http_server::{create_app, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_image_missing_prompt_is_400() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(post_json("/api/generate-image", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn test_generate_image_blank_prompt_is_400() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(post_json("/api/generate-image", r#"{"prompt": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn test_generate_image_url_missing_prompt_is_400() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(post_json("/api/generate-image-url", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn test_generate_image_url_blank_prompt_is_400() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(post_json("/api/generate-image-url", r#"{"prompt": ""}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}
