// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

use crate::store::GeneratedImage;

/// Envelope for GET /api/images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<GeneratedImage>,
}

/// Envelope for single-record responses (POST /api/images)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: GeneratedImage,
}
