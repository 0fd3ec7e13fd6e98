// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Flux-generate request type and validation

use serde::{Deserialize, Serialize};

use crate::generation::types::DEFAULT_DIMENSION;
use crate::generation::GenerationRequest;

/// Request for POST /api/flux-generate
///
/// `prompt` is optional at the wire level so a missing field produces a 400
/// with a clear message instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluxGenerateRequest {
    /// Text prompt describing the desired image
    pub prompt: Option<String>,

    /// Model hint (optional; ignored by providers without model selection)
    #[serde(default)]
    pub model: Option<String>,

    /// Output width in pixels, default 1024
    #[serde(default)]
    pub width: Option<u32>,

    /// Output height in pixels, default 1024
    #[serde(default)]
    pub height: Option<u32>,
}

impl FluxGenerateRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        match &self.prompt {
            Some(prompt) if !prompt.trim().is_empty() => Ok(()),
            _ => Err("Prompt is required".to_string()),
        }
    }

    /// The prompt text; empty when absent (callers validate first)
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }

    /// Build the cascade request, applying dimension defaults
    pub fn to_generation_request(&self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt().to_string(),
            model: self.model.clone(),
            width: self.width.unwrap_or(DEFAULT_DIMENSION),
            height: self.height.unwrap_or(DEFAULT_DIMENSION),
        }
    }
}
