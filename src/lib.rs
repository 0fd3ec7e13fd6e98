// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod generation;
pub mod store;
pub mod version;

// Re-export main types
pub use api::{ApiError, ErrorResponse};
pub use config::AppConfig;
pub use generation::{
    GenerationOutcome, GenerationRequest, GenerationService, ImageProvider, ProviderError,
    ProviderImage,
};
pub use store::{GeneratedImage, ImageStore, MemoryStore, NewImage, StoreError};
