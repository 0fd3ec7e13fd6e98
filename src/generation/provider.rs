// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image provider trait definition

use async_trait::async_trait;

use super::types::{GenerationRequest, ProviderError, ProviderImage};

/// Trait for implementing image-generation providers
///
/// Providers implement this trait to serve one tier of the fallback
/// cascade. Multiple providers can be configured with automatic failover.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Generate an image for the given request
    ///
    /// # Returns
    /// A usable image (URL or `data:` URI) or a provider error. Errors are
    /// absorbed by the cascade and never surface to API callers.
    async fn generate(&self, request: &GenerationRequest)
        -> Result<ProviderImage, ProviderError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Check if the provider is available (has API key, etc.)
    fn is_available(&self) -> bool;

    /// Get provider priority (lower = preferred)
    ///
    /// Default priority is 100. Providers with lower priority
    /// are tried first during failover.
    fn priority(&self) -> u8 {
        100
    }
}
