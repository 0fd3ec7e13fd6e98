// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Flux-generate response types

use serde::{Deserialize, Serialize};

use crate::generation::{placeholder, GenerationOutcome};

/// Response for POST /api/flux-generate
///
/// Provider results carry `success: true`; the placeholder branch carries
/// `message` and `isPlaceholder: true` instead, matching the wire shape the
/// gallery UI consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluxGenerateResponse {
    pub image_url: String,
    pub model: String,
    pub prompt: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_placeholder: Option<bool>,
}

impl FluxGenerateResponse {
    pub fn from_outcome(prompt: &str, outcome: GenerationOutcome) -> Self {
        if outcome.placeholder {
            Self {
                image_url: outcome.image_url,
                model: outcome.model,
                prompt: prompt.to_string(),
                source: outcome.source,
                success: None,
                message: outcome.message,
                is_placeholder: Some(true),
            }
        } else {
            Self {
                image_url: outcome.image_url,
                model: outcome.model,
                prompt: prompt.to_string(),
                source: outcome.source,
                success: Some(true),
                message: None,
                is_placeholder: None,
            }
        }
    }
}

/// Body returned when an error escapes the whole generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyResponse {
    pub image_url: String,
    pub message: String,
    pub is_error: bool,
}

impl EmergencyResponse {
    pub fn for_prompt(prompt: &str, error: &str) -> Self {
        Self {
            image_url: placeholder::emergency_url(prompt),
            message: format!("Error: {}", error),
            is_error: true,
        }
    }
}
