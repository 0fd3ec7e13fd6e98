// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the image-generation cascade

use thiserror::Error;

/// Default output dimension when the caller does not specify one
pub const DEFAULT_DIMENSION: u32 = 1024;

/// One generation attempt: a prompt plus the desired output dimensions
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Text prompt describing the desired image
    pub prompt: String,
    /// Model hint; providers that do not support it ignore it
    pub model: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
        }
    }

    /// Validate the request fields
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// A usable result from a single provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderImage {
    /// HTTP(S) URL or `data:` URI
    pub image_url: String,
    /// Display label for the model that produced the image
    pub model: String,
    /// Provider tier label, e.g. "Hugging Face"
    pub source: String,
}

/// Final result of the cascade, placeholder included
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub image_url: String,
    pub model: String,
    pub source: String,
    /// True when no provider succeeded and the seeded placeholder was used
    pub placeholder: bool,
    /// Human-readable note set on the placeholder branch
    pub message: Option<String>,
}

impl GenerationOutcome {
    pub fn from_provider(image: ProviderImage) -> Self {
        Self {
            image_url: image.image_url,
            model: image.model,
            source: image.source,
            placeholder: false,
            message: None,
        }
    }
}

/// Errors that can occur while calling an upstream image provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Provider requires a credential that is not configured
    #[error("provider not configured")]
    NotConfigured,

    /// Transport-level failure before a response was received
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded its deadline
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Provider answered with a non-success status
    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Provider answered 2xx but the payload is not a usable image
    #[error("unusable payload: {0}")]
    UnusablePayload(String),
}

impl ProviderError {
    /// Map a reqwest transport error, preserving timeouts
    pub fn from_reqwest(e: reqwest::Error, timeout_ms: u64) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout { timeout_ms }
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}
