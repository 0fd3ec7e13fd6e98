// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload endpoint handler

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::Multipart;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::response::{UploadImageResponse, UploadedImage};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::store::{NewImage, ANONYMOUS_USER_ID};

/// POST /api/upload-image - Persist an already-rendered image blob
///
/// The blob goes to object storage first; if that fails it is embedded as a
/// `data:` URI so the record can still be written. A failed record insert
/// after a successful upload cleans the blob back out.
pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut prompt: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                return ApiError::InvalidRequest("Image and prompt are required".to_string())
                    .into_response();
            }
        };

        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("image") => match field.bytes().await {
                Ok(bytes) => image_bytes = Some(bytes.to_vec()),
                Err(e) => {
                    warn!("Failed to read image field: {}", e);
                    return ApiError::InvalidRequest("Image and prompt are required".to_string())
                        .into_response();
                }
            },
            Some("prompt") => match field.text().await {
                Ok(text) => prompt = Some(text),
                Err(e) => {
                    warn!("Failed to read prompt field: {}", e);
                    return ApiError::InvalidRequest("Image and prompt are required".to_string())
                        .into_response();
                }
            },
            _ => {}
        }
    }

    let (bytes, prompt) = match (image_bytes, prompt) {
        (Some(bytes), Some(prompt)) if !bytes.is_empty() && !prompt.trim().is_empty() => {
            (bytes, prompt)
        }
        _ => {
            return ApiError::InvalidRequest("Image and prompt are required".to_string())
                .into_response()
        }
    };

    // The render pipeline produces JPEG, so keys carry a .jpg extension
    let key = format!("{}/{}.jpg", ANONYMOUS_USER_ID, Utc::now().timestamp_millis());

    let mut stored_key: Option<String> = None;
    let public_url = match &state.bucket {
        Some(bucket) => match bucket.upload(&key, bytes.clone(), "image/jpeg").await {
            Ok(url) => {
                info!("Uploaded {} bytes to storage as {}", bytes.len(), key);
                stored_key = Some(key.clone());
                url
            }
            Err(e) => {
                error!("Storage upload failed, embedding as data URI: {}", e);
                format!("data:image/jpeg;base64,{}", BASE64.encode(&bytes))
            }
        },
        None => {
            debug!("No storage bucket configured, embedding as data URI");
            format!("data:image/jpeg;base64,{}", BASE64.encode(&bytes))
        }
    };

    match state
        .store
        .insert(NewImage::anonymous(&prompt, public_url))
        .await
    {
        Ok(record) => Json(UploadImageResponse {
            image: UploadedImage::from_record(record),
        })
        .into_response(),
        Err(e) => {
            error!("Record insert failed after upload: {}", e);
            if let (Some(bucket), Some(key)) = (&state.bucket, stored_key) {
                if let Err(cleanup) = bucket.remove(&key).await {
                    warn!("Orphaned blob {} could not be removed: {}", key, cleanup);
                }
            }
            ApiError::InternalError("Failed to save image record".to_string()).into_response()
        }
    }
}
