// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hugging Face inference API provider (tier 1)
//!
//! Token-gated. Walks a fixed list of hosted model endpoints in order and
//! accepts the first binary payload that passes the size sanity check.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::provider::ImageProvider;
use super::types::{GenerationRequest, ProviderError, ProviderImage};

/// Hosted model endpoints, tried in order
const MODEL_ENDPOINTS: &[&str] = &[
    "https://api-inference.huggingface.co/models/black-forest-labs/FLUX.1-schnell",
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0",
    "https://api-inference.huggingface.co/models/runwayml/stable-diffusion-v1-5",
];

/// Responses at or below this size are error pages, not images
const MIN_IMAGE_BYTES: usize = 1000;

/// Provider-imposed dimension ceiling
const MAX_DIMENSION: u32 = 1024;

/// Hugging Face inference API provider
pub struct HuggingFaceProvider {
    token: String,
    client: Client,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider
    ///
    /// # Arguments
    /// * `token` - Hugging Face API bearer token
    pub fn new(token: String) -> Self {
        // No request deadline on this tier; an unresponsive host stalls the
        // cascade (documented gap).
        Self {
            token,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ImageProvider for HuggingFaceProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ProviderImage, ProviderError> {
        let body = json!({
            "inputs": request.prompt,
            "parameters": {
                "width": request.width.min(MAX_DIMENSION),
                "height": request.height.min(MAX_DIMENSION),
            }
        });

        let mut last_error = ProviderError::UnusablePayload("no endpoints attempted".to_string());

        for endpoint in MODEL_ENDPOINTS {
            debug!("Trying Hugging Face endpoint: {}", endpoint);

            let response = match self
                .client
                .post(*endpoint)
                .bearer_auth(&self.token)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    last_error = ProviderError::Network(e.to_string());
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                last_error = ProviderError::Upstream {
                    status: status.as_u16(),
                    message,
                };
                continue;
            }

            let bytes = match response.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    last_error = ProviderError::Network(e.to_string());
                    continue;
                }
            };

            if bytes.len() <= MIN_IMAGE_BYTES {
                last_error = ProviderError::UnusablePayload(format!(
                    "{} bytes from {}, below sanity threshold",
                    bytes.len(),
                    endpoint
                ));
                continue;
            }

            let encoded = BASE64.encode(&bytes);
            return Ok(ProviderImage {
                image_url: format!("data:image/png;base64,{}", encoded),
                model: "Hugging Face AI".to_string(),
                source: "Hugging Face".to_string(),
            });
        }

        Err(last_error)
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn is_available(&self) -> bool {
        !self.token.is_empty()
    }

    fn priority(&self) -> u8 {
        10 // Preferred when a token is configured
    }
}
