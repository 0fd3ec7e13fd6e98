// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /api/generate-image and /api/generate-image-url - chat-completion
//! proxy endpoints (single provider, no fallback chain)

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{generate_image_handler, generate_image_url_handler};
pub use request::PromptRequest;
pub use response::ImageUrlsResponse;
