// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response for POST /api/generate-image-url
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUrlsResponse {
    /// First extracted URL
    pub image_url: String,
    /// Every URL found in the upstream response, in order
    pub all_urls: Vec<String>,
}
