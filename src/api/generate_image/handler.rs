// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat-completion proxy handlers

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::request::PromptRequest;
use super::response::ImageUrlsResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::generation::longcat;
use crate::store::NewImage;

/// POST /api/generate-image - Proxy a prompt through the chat-completion
/// backend and return the generated image bytes directly.
///
/// The upstream responds with an event stream whose payload embeds image
/// URLs; the first one is fetched and relayed so the browser never talks to
/// the upstream CDN itself. The URL is persisted before the bytes are
/// fetched, and a store failure never blocks the response.
pub async fn generate_image_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PromptRequest>,
) -> Response {
    let prompt = match request.validate() {
        Ok(prompt) => prompt.to_string(),
        Err(e) => {
            warn!("Image proxy validation failed: {}", e);
            return ApiError::InvalidRequest(e).into_response();
        }
    };

    let body = match state.longcat.request_completion(&prompt).await {
        Ok(body) => body,
        Err(e) => {
            error!("Completion request failed: {}", e);
            return ApiError::UpstreamFailure {
                message: "Failed to generate image".to_string(),
                details: e.to_string(),
            }
            .into_response();
        }
    };

    let urls = longcat::extract_image_urls(&body);
    let image_url = match urls.first() {
        Some(url) => url.clone(),
        None => {
            error!("Completion response contained no image URLs");
            return ApiError::UpstreamFailure {
                message: "Failed to generate image".to_string(),
                details: "No image URL in upstream response".to_string(),
            }
            .into_response();
        }
    };
    info!("Upstream returned {} image URL(s)", urls.len());

    match state
        .store
        .insert(NewImage::anonymous(&prompt, image_url.clone()))
        .await
    {
        Ok(saved) => debug!("Proxied image persisted: {}", saved.id),
        Err(e) => warn!("Proxied image not persisted: {}", e),
    }

    let bytes = match state.longcat.fetch_image(&image_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Image fetch failed: {}", e);
            return ApiError::UpstreamFailure {
                message: "Failed to generate image".to_string(),
                details: e.to_string(),
            }
            .into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, "image/jpeg".to_string()),
            (
                header::CACHE_CONTROL,
                "public, max-age=31536000".to_string(),
            ),
            (header::HeaderName::from_static("x-original-url"), image_url),
        ],
        bytes,
    )
        .into_response()
}

/// POST /api/generate-image-url - Same upstream call, but returns the URLs
/// as JSON instead of relaying the bytes. Nothing is persisted here; the
/// caller decides what to do with the URLs.
pub async fn generate_image_url_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PromptRequest>,
) -> Response {
    let prompt = match request.validate() {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("Image URL proxy validation failed: {}", e);
            return ApiError::InvalidRequest(e).into_response();
        }
    };

    let body = match state.longcat.request_completion(prompt).await {
        Ok(body) => body,
        Err(e) => {
            error!("Completion request failed: {}", e);
            return ApiError::UpstreamFailure {
                message: "Failed to get image URL".to_string(),
                details: e.to_string(),
            }
            .into_response();
        }
    };

    let urls = longcat::extract_image_urls(&body);
    match urls.first() {
        Some(url) => Json(ImageUrlsResponse {
            image_url: url.clone(),
            all_urls: urls.clone(),
        })
        .into_response(),
        None => {
            error!("Completion response contained no image URLs");
            ApiError::UpstreamFailure {
                message: "Failed to get image URL".to_string(),
                details: "No image URL in upstream response".to_string(),
            }
            .into_response()
        }
    }
}
