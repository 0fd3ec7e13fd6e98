// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation: multi-provider fallback cascade and the
//! single-provider chat-completion proxy.

pub mod deepai;
pub mod huggingface;
pub mod longcat;
pub mod placeholder;
pub mod pollinations;
pub mod provider;
pub mod service;
pub mod types;

pub use deepai::DeepAiProvider;
pub use huggingface::HuggingFaceProvider;
pub use longcat::{extract_image_urls, LongcatClient};
pub use pollinations::PollinationsProvider;
pub use provider::ImageProvider;
pub use service::GenerationService;
pub use types::{GenerationOutcome, GenerationRequest, ProviderError, ProviderImage};
