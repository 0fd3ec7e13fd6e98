// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gallery CRUD handlers
//!
//! The gallery degrades instead of failing: when the backing store errors,
//! list and create answer with mock records so the UI keeps rendering, and
//! delete always reports success.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

use super::request::{CreateImageRequest, UpdateImageRequest};
use super::response::{ImageResponse, ImagesResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::store::{GeneratedImage, NewImage, ANONYMOUS_USER_ID};

const MOCK_IMAGE_URL: &str = "/api/placeholder/512/512";
const MOCK_USER_ID: &str = "mock-user";

fn mock_gallery() -> Vec<GeneratedImage> {
    let now = Utc::now();
    vec![
        GeneratedImage {
            id: "mock-1".to_string(),
            user_id: MOCK_USER_ID.to_string(),
            prompt: "A beautiful sunset over mountains".to_string(),
            image_url: MOCK_IMAGE_URL.to_string(),
            liked: false,
            created_at: now,
            updated_at: now,
        },
        GeneratedImage {
            id: "mock-2".to_string(),
            user_id: MOCK_USER_ID.to_string(),
            prompt: "Abstract digital art with vibrant colors".to_string(),
            image_url: MOCK_IMAGE_URL.to_string(),
            liked: true,
            created_at: now,
            updated_at: now,
        },
    ]
}

/// GET /api/images - Every gallery record, newest first
pub async fn list_images_handler(State(state): State<Arc<AppState>>) -> Json<ImagesResponse> {
    match state.store.list().await {
        Ok(images) => {
            debug!("Listed {} gallery records", images.len());
            Json(ImagesResponse { images })
        }
        Err(e) => {
            error!("Gallery list failed, serving mock records: {}", e);
            Json(ImagesResponse {
                images: mock_gallery(),
            })
        }
    }
}

/// POST /api/images - Save a record directly (client-side fallback path)
pub async fn create_image_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateImageRequest>,
) -> Response {
    let (prompt, image_url) = match request.validate() {
        Ok(fields) => fields,
        Err(e) => return ApiError::InvalidRequest(e).into_response(),
    };

    match state
        .store
        .insert(NewImage::anonymous(&prompt, image_url.clone()))
        .await
    {
        Ok(image) => Json(ImageResponse { image }).into_response(),
        Err(e) => {
            error!("Gallery insert failed, fabricating record: {}", e);
            let now = Utc::now();
            let image = GeneratedImage {
                id: format!("generated-{}", now.timestamp_millis()),
                user_id: ANONYMOUS_USER_ID.to_string(),
                prompt,
                image_url,
                liked: false,
                created_at: now,
                updated_at: now,
            };
            Json(ImageResponse { image }).into_response()
        }
    }
}

/// PUT /api/images/:id - Toggle the liked flag
pub async fn update_image_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateImageRequest>,
) -> Response {
    match state.store.set_liked(&id, request.liked).await {
        Ok(image) => Json(ImageResponse { image }).into_response(),
        Err(e) => {
            error!("Gallery update failed, echoing request: {}", e);
            Json(json!({
                "image": {
                    "id": id,
                    "liked": request.liked,
                    "updated_at": Utc::now(),
                }
            }))
            .into_response()
        }
    }
}

/// DELETE /api/images/:id - Remove a record; reports success even when the
/// store errors so the UI can drop the tile either way
pub async fn delete_image_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    if let Err(e) = state.store.delete(&id).await {
        error!("Gallery delete failed for {}: {}", id, e);
    } else {
        debug!("Deleted gallery record {}", id);
    }
    Json(json!({ "success": true }))
}
