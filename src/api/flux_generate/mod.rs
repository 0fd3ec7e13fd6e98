// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /api/flux-generate - provider-cascade image generation

pub mod handler;
pub mod request;
pub mod response;

pub use handler::flux_generate_handler;
pub use request::FluxGenerateRequest;
pub use response::{EmergencyResponse, FluxGenerateResponse};
