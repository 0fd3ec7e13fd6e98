// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Body for POST /api/images
///
/// Both fields are optional at the wire level so a missing field produces a
/// 400 with a clear message instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateImageRequest {
    pub prompt: Option<String>,
    pub image_url: Option<String>,
}

impl CreateImageRequest {
    pub fn validate(&self) -> Result<(String, String), String> {
        match (&self.prompt, &self.image_url) {
            (Some(prompt), Some(image_url))
                if !prompt.trim().is_empty() && !image_url.is_empty() =>
            {
                Ok((prompt.trim().to_string(), image_url.clone()))
            }
            _ => Err("Prompt and image_url are required".to_string()),
        }
    }
}

/// Body for PUT /api/images/:id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateImageRequest {
    pub liked: bool,
}
