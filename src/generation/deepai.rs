// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DeepAI text2img provider (tier 3)
//!
//! Free-tier endpoint with a fixed public quota key. Single POST, accepted
//! when the response carries an output location.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::provider::ImageProvider;
use super::types::{GenerationRequest, ProviderError, ProviderImage};

const API_URL: &str = "https://api.deepai.org/api/text2img";

/// Public quickstart key published by DeepAI for free-tier access
const QUICKSTART_API_KEY: &str = "quickstart-QUdJIGlzIGNvbWluZy4uLi4K";

/// DeepAI text2img provider
pub struct DeepAiProvider {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DeepAiResponse {
    output_url: Option<String>,
}

impl DeepAiProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for DeepAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for DeepAiProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ProviderImage, ProviderError> {
        debug!("Trying DeepAI text2img");

        let response = self
            .client
            .post(API_URL)
            .header("Api-Key", QUICKSTART_API_KEY)
            .json(&json!({ "text": request.prompt }))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let data: DeepAiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::UnusablePayload(format!("JSON parse error: {}", e)))?;

        match data.output_url {
            Some(output_url) => Ok(ProviderImage {
                image_url: output_url,
                model: "DeepAI Text2Image".to_string(),
                source: "DeepAI".to_string(),
            }),
            None => Err(ProviderError::UnusablePayload(
                "response has no output_url".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "deepai"
    }

    fn is_available(&self) -> bool {
        true // Fixed public quota key
    }

    fn priority(&self) -> u8 {
        30
    }
}
