// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Flux-generate endpoint handler

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::request::FluxGenerateRequest;
use super::response::{EmergencyResponse, FluxGenerateResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::store::NewImage;

/// POST /api/flux-generate - Run the provider cascade for a prompt
///
/// Pipeline:
/// 1. Validate request (missing prompt -> 400)
/// 2. Run the cascade; provider failures are absorbed inside it
/// 3. Persist the chosen result; a store failure never blocks the response
/// 4. Malformed input that escapes validation answers with the emergency
///    placeholder instead of an error status
pub async fn flux_generate_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FluxGenerateRequest>,
) -> Response {
    debug!(
        "Generation request received: prompt_len={}, model={:?}",
        request.prompt().len(),
        request.model
    );

    if let Err(e) = request.validate() {
        warn!("Generation validation failed: {}", e);
        return ApiError::InvalidRequest(e).into_response();
    }

    let generation_request = request.to_generation_request();
    if let Err(e) = generation_request.validate() {
        error!("Malformed generation request: {}", e);
        return Json(EmergencyResponse::for_prompt(request.prompt(), &e)).into_response();
    }

    let outcome = state.generation.generate(&generation_request).await;

    match state
        .store
        .insert(NewImage::anonymous(
            request.prompt(),
            outcome.image_url.clone(),
        ))
        .await
    {
        Ok(saved) => debug!("Generation result persisted: {}", saved.id),
        Err(e) => warn!("Generation result not persisted: {}", e),
    }

    Json(FluxGenerateResponse::from_outcome(request.prompt(), outcome)).into_response()
}
