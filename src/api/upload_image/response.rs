// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::GeneratedImage;

/// Envelope for POST /api/upload-image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImageResponse {
    pub image: UploadedImage,
}

/// Trimmed record shape the upload endpoint returns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
}

impl UploadedImage {
    pub fn from_record(record: GeneratedImage) -> Self {
        Self {
            id: record.id,
            url: record.image_url,
            prompt: record.prompt,
            created_at: record.created_at,
            liked: record.liked,
        }
    }
}
