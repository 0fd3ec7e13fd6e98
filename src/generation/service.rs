// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fallback orchestration across image providers
//!
//! Providers are tried one at a time, in priority order, with no fan-out.
//! Every provider failure is absorbed; the seeded placeholder is the
//! terminal tier and cannot fail, so callers always get something
//! displayable.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::deepai::DeepAiProvider;
use super::huggingface::HuggingFaceProvider;
use super::placeholder;
use super::pollinations::PollinationsProvider;
use super::provider::ImageProvider;
use super::types::{GenerationOutcome, GenerationRequest};
use crate::config::GenerationConfig;

const FALLBACK_MESSAGE: &str = "AI services unavailable - showing colorful placeholder";

/// Orchestrates the provider cascade for one generation request
pub struct GenerationService {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl GenerationService {
    /// Create a service with the standard tier stack from configuration
    pub fn new(config: &GenerationConfig) -> Self {
        let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

        // Add Hugging Face if a token is configured (priority 10)
        if let Some(ref token) = config.huggingface_token {
            if !token.is_empty() {
                providers.push(Box::new(HuggingFaceProvider::new(token.clone())));
                debug!("Hugging Face provider enabled");
            }
        }

        // Pollinations needs no credential (priority 20)
        providers.push(Box::new(PollinationsProvider::new(
            config.pollinations_timeout_secs,
        )));

        // DeepAI free tier (priority 30)
        providers.push(Box::new(DeepAiProvider::new()));

        Self::with_providers(providers)
    }

    /// Create a service from an explicit provider list (tests, custom stacks)
    pub fn with_providers(mut providers: Vec<Box<dyn ImageProvider>>) -> Self {
        // Sort by priority (lower = preferred)
        providers.sort_by_key(|p| p.priority());
        Self { providers }
    }

    /// Run the cascade for one request
    ///
    /// Never hard-fails: if every provider attempt fails or returns an
    /// unusable payload, the deterministic seeded placeholder is returned
    /// instead of an error.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let start = Instant::now();

        for provider in &self.providers {
            if !provider.is_available() {
                continue;
            }

            debug!("Trying image provider: {}", provider.name());

            match provider.generate(request).await {
                Ok(image) => {
                    info!(
                        "Image generated by {} in {}ms",
                        provider.name(),
                        start.elapsed().as_millis()
                    );
                    return GenerationOutcome::from_provider(image);
                }
                Err(e) => {
                    warn!(
                        "Image provider {} failed: {}, trying next",
                        provider.name(),
                        e
                    );
                    continue;
                }
            }
        }

        info!(
            "All providers exhausted, using seeded placeholder (seed={})",
            placeholder::prompt_seed(&request.prompt)
        );

        GenerationOutcome {
            image_url: placeholder::seeded_url(&request.prompt, request.width, request.height),
            model: "Colorful Placeholder".to_string(),
            source: "Fallback".to_string(),
            placeholder: true,
            message: Some(FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Get list of available provider names, in cascade order
    pub fn available_providers(&self) -> Vec<&str> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .map(|p| p.name())
            .collect()
    }
}
