// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fallback cascade tests with scripted providers
//!
//! These tests verify that:
//! - Providers are tried in priority order, lower number first
//! - A success stops the cascade; later tiers are never invoked
//! - Failures are absorbed and the next tier is tried
//! - Unavailable providers are skipped without an attempt
//! - An exhausted cascade resolves to the deterministic placeholder

use async_trait::async_trait;
use imagestudio_node::generation::{
    GenerationRequest, GenerationService, ImageProvider, ProviderError, ProviderImage,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted provider: answers success or a fixed error, counting calls
struct ScriptedProvider {
    name: &'static str,
    priority: u8,
    available: bool,
    succeed: bool,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    fn new(name: &'static str, priority: u8, succeed: bool) -> (Box<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Box::new(Self {
            name,
            priority,
            available: true,
            succeed,
            calls: calls.clone(),
        });
        (provider, calls)
    }

    fn unavailable(name: &'static str, priority: u8) -> (Box<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = Box::new(Self {
            name,
            priority,
            available: false,
            succeed: true,
            calls: calls.clone(),
        });
        (provider, calls)
    }
}

#[async_trait]
impl ImageProvider for ScriptedProvider {
    async fn generate(&self, _request: &GenerationRequest) -> Result<ProviderImage, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(ProviderImage {
                image_url: format!("https://images.test/{}.png", self.name),
                model: format!("{} model", self.name),
                source: self.name.to_string(),
            })
        } else {
            Err(ProviderError::Upstream {
                status: 503,
                message: "scripted failure".to_string(),
            })
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

#[tokio::test]
async fn test_first_tier_success_stops_cascade() {
    let (first, first_calls) = ScriptedProvider::new("first", 10, true);
    let (second, second_calls) = ScriptedProvider::new("second", 20, true);

    let service = GenerationService::with_providers(vec![first, second]);
    let outcome = service.generate(&GenerationRequest::new("a cat")).await;

    assert_eq!(outcome.source, "first");
    assert!(!outcome.placeholder);
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_priority_order_beats_insertion_order() {
    let (low_priority, low_calls) = ScriptedProvider::new("low", 90, true);
    let (high_priority, high_calls) = ScriptedProvider::new("high", 10, true);

    // Inserted backwards on purpose
    let service = GenerationService::with_providers(vec![low_priority, high_priority]);
    let outcome = service.generate(&GenerationRequest::new("a cat")).await;

    assert_eq!(outcome.source, "high");
    assert_eq!(high_calls.load(Ordering::SeqCst), 1);
    assert_eq!(low_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failure_falls_through_to_next_tier() {
    let (failing, failing_calls) = ScriptedProvider::new("failing", 10, false);
    let (backup, backup_calls) = ScriptedProvider::new("backup", 20, true);

    let service = GenerationService::with_providers(vec![failing, backup]);
    let outcome = service.generate(&GenerationRequest::new("a cat")).await;

    assert_eq!(outcome.source, "backup");
    assert_eq!(failing_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unusable_payload_advances_cascade() {
    struct HtmlErrorPageProvider;

    #[async_trait]
    impl ImageProvider for HtmlErrorPageProvider {
        async fn generate(
            &self,
            _request: &GenerationRequest,
        ) -> Result<ProviderImage, ProviderError> {
            // Some providers answer 200 with an HTML error page
            Err(ProviderError::UnusablePayload(
                "non-image content type".to_string(),
            ))
        }

        fn name(&self) -> &'static str {
            "html-error-page"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn priority(&self) -> u8 {
            10
        }
    }

    let (backup, backup_calls) = ScriptedProvider::new("backup", 20, true);
    let service = GenerationService::with_providers(vec![Box::new(HtmlErrorPageProvider), backup]);

    let outcome = service.generate(&GenerationRequest::new("a cat")).await;
    assert_eq!(outcome.source, "backup");
    assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unavailable_provider_is_never_invoked() {
    let (missing_key, missing_calls) = ScriptedProvider::unavailable("missing-key", 10);
    let (backup, backup_calls) = ScriptedProvider::new("backup", 20, true);

    let service = GenerationService::with_providers(vec![missing_key, backup]);
    let outcome = service.generate(&GenerationRequest::new("a cat")).await;

    assert_eq!(outcome.source, "backup");
    assert_eq!(missing_calls.load(Ordering::SeqCst), 0);
    assert_eq!(backup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exhausted_cascade_resolves_to_placeholder() {
    let (first, _) = ScriptedProvider::new("first", 10, false);
    let (second, _) = ScriptedProvider::new("second", 20, false);

    let service = GenerationService::with_providers(vec![first, second]);
    let outcome = service
        .generate(&GenerationRequest::new("a red balloon"))
        .await;

    assert!(outcome.placeholder);
    assert_eq!(outcome.source, "Fallback");
    assert_eq!(outcome.model, "Colorful Placeholder");
    assert_eq!(
        outcome.image_url,
        "https://picsum.photos/seed/1219/1024/1024"
    );
    assert!(outcome.message.is_some());
}

#[tokio::test]
async fn test_placeholder_is_deterministic_per_prompt() {
    let service = GenerationService::with_providers(vec![]);
    let request = GenerationRequest::new("a red balloon");

    let first = service.generate(&request).await;
    let second = service.generate(&request).await;
    assert_eq!(first.image_url, second.image_url);
}

#[tokio::test]
async fn test_available_providers_reflects_cascade_order() {
    let (low, _) = ScriptedProvider::new("low", 90, true);
    let (high, _) = ScriptedProvider::new("high", 10, true);
    let (hidden, _) = ScriptedProvider::unavailable("hidden", 50);

    let service = GenerationService::with_providers(vec![low, high, hidden]);
    assert_eq!(service.available_providers(), vec!["high", "low"]);
}
