// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /api/upload-image - multipart upload of a rendered image blob

pub mod handler;
pub mod response;

pub use handler::upload_image_handler;
pub use response::{UploadImageResponse, UploadedImage};
