// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Gallery CRUD endpoint tests against the in-memory store

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use imagestudio_node::api::http_server::{create_app, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn create_image(state: &Arc<AppState>, prompt: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "prompt": prompt,
        "image_url": "https://example.com/a.png",
    });
    let response = create_app(state.clone())
        .oneshot(json_request(Method::POST, "/api/images", &body.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_empty_gallery_lists_no_images() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/images")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["images"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_returns_saved_record() {
    let state = Arc::new(AppState::new_for_test());
    let json = create_image(&state, "  a sunset  ").await;

    let image = &json["image"];
    assert!(!image["id"].as_str().unwrap().is_empty());
    assert_eq!(image["prompt"], "a sunset");
    assert_eq!(image["image_url"], "https://example.com/a.png");
    assert_eq!(image["liked"], false);
    assert_eq!(image["user_id"], "00000000-0000-0000-0000-000000000000");
}

#[tokio::test]
async fn test_create_without_image_url_is_rejected() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(json_request(
            Method::POST,
            "/api/images",
            r#"{"prompt": "a sunset"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Prompt and image_url are required");
}

#[tokio::test]
async fn test_update_toggles_liked_flag() {
    let state = Arc::new(AppState::new_for_test());
    let created = create_image(&state, "a sunset").await;
    let id = created["image"]["id"].as_str().unwrap().to_string();

    let response = create_app(state.clone())
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/images/{}", id),
            r#"{"liked": true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["image"]["id"], id.as_str());
    assert_eq!(json["image"]["liked"], true);
}

#[tokio::test]
async fn test_update_unknown_id_echoes_request() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(json_request(
            Method::PUT,
            "/api/images/no-such-id",
            r#"{"liked": true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["image"]["id"], "no-such-id");
    assert_eq!(json["image"]["liked"], true);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let state = Arc::new(AppState::new_for_test());
    let created = create_image(&state, "a sunset").await;
    let id = created["image"]["id"].as_str().unwrap().to_string();

    let response = create_app(state.clone())
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/images/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

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
    assert_eq!(body_json(list).await["images"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_unknown_id_still_succeeds() {
    let response = create_app(Arc::new(AppState::new_for_test()))
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/api/images/no-such-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}
