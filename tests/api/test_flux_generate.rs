// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Flux-generate endpoint tests
//!
//! The test state carries an empty provider cascade, so every valid request
//! resolves to the deterministic placeholder tier. That keeps these tests
//! offline while still exercising validation, the response shape, and the
//! best-effort gallery write.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use imagestudio_node::api::http_server::{create_app, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/flux-generate")
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
async fn test_empty_prompt_is_rejected() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(generate_request(r#"{"prompt": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn test_missing_prompt_field_is_rejected() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    // A body without the prompt field must reach the handler's own 400,
    // not die in the JSON extractor
    let response = app.oneshot(generate_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn test_exhausted_cascade_returns_placeholder() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(generate_request(r#"{"prompt": "a red balloon"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["imageUrl"], "https://picsum.photos/seed/1219/1024/1024");
    assert_eq!(json["source"], "Fallback");
    assert_eq!(json["isPlaceholder"], true);
    assert_eq!(json["prompt"], "a red balloon");
    assert!(json.get("success").is_none());
}

#[tokio::test]
async fn test_custom_dimensions_flow_into_placeholder_url() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(generate_request(
            r#"{"prompt": "a red balloon", "width": 512, "height": 768}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["imageUrl"], "https://picsum.photos/seed/1219/512/768");
}

#[tokio::test]
async fn test_zero_dimension_gets_emergency_placeholder() {
    let app = create_app(Arc::new(AppState::new_for_test()));

    let response = app
        .oneshot(generate_request(r#"{"prompt": "a cat", "width": 0}"#))
        .await
        .unwrap();
    // The emergency path answers 200 with an error-flagged body
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["isError"], true);
    assert!(json["message"].as_str().unwrap().starts_with("Error: "));
    assert!(json["imageUrl"]
        .as_str()
        .unwrap()
        .contains("via.placeholder.com"));
}

#[tokio::test]
async fn test_generation_result_lands_in_gallery() {
    let state = Arc::new(AppState::new_for_test());

    let response = create_app(state.clone())
        .oneshot(generate_request(r#"{"prompt": "a quiet harbor"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = create_app(state)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/images")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(list).await;

    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["prompt"], "a quiet harbor");
    assert_eq!(images[0]["liked"], false);
}
