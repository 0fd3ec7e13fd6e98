// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Pollinations provider (tier 2)
//!
//! Keyless, parameterized-URL generator. Builds several style variants and
//! accepts the first response whose Content-Type is an image MIME type; the
//! accepted variant URL itself is the result.

use async_trait::async_trait;
use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::provider::ImageProvider;
use super::types::{GenerationRequest, ProviderError, ProviderImage};

const BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Style variants tried in order; `None` omits the model parameter
const MODEL_VARIANTS: &[Option<&str>] = &[Some("flux"), Some("turbo"), None];

/// Pollinations image provider
pub struct PollinationsProvider {
    client: Client,
    timeout: Duration,
}

impl PollinationsProvider {
    /// Create a new Pollinations provider with a per-variant timeout
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn variant_url(&self, request: &GenerationRequest, model: Option<&str>) -> Url {
        let mut url = Url::parse(BASE_URL).expect("static base URL");
        url.path_segments_mut()
            .expect("base URL has a path")
            .pop_if_empty()
            .push(&request.prompt);

        let seed: u32 = rand::thread_rng().gen_range(0..1_000_000);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("width", &request.width.to_string());
            pairs.append_pair("height", &request.height.to_string());
            if let Some(model) = model {
                pairs.append_pair("model", model);
            }
            pairs.append_pair("nologo", "true");
            pairs.append_pair("enhance", "true");
            pairs.append_pair("seed", &seed.to_string());
        }
        url
    }
}

#[async_trait]
impl ImageProvider for PollinationsProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ProviderImage, ProviderError> {
        let timeout_ms = self.timeout.as_millis() as u64;
        let mut last_error = ProviderError::UnusablePayload("no variants attempted".to_string());

        for model in MODEL_VARIANTS {
            let url = self.variant_url(request, *model);
            debug!("Trying Pollinations variant: model={:?}", model);

            let response = match self
                .client
                .get(url.clone())
                .timeout(self.timeout)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    last_error = ProviderError::from_reqwest(e, timeout_ms);
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                last_error = ProviderError::Upstream {
                    status: status.as_u16(),
                    message: format!("variant model={:?}", model),
                };
                continue;
            }

            let is_image = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.starts_with("image/"))
                .unwrap_or(false);

            if !is_image {
                // Error pages come back 200 with an HTML body; keep going.
                last_error = ProviderError::UnusablePayload(format!(
                    "non-image content type from variant model={:?}",
                    model
                ));
                continue;
            }

            return Ok(ProviderImage {
                image_url: url.to_string(),
                model: "Pollinations AI".to_string(),
                source: "Pollinations AI".to_string(),
            });
        }

        Err(last_error)
    }

    fn name(&self) -> &'static str {
        "pollinations"
    }

    fn is_available(&self) -> bool {
        true // No API key needed
    }

    fn priority(&self) -> u8 {
        20
    }
}
