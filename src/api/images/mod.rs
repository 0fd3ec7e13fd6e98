// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gallery CRUD endpoints under /api/images

pub mod handlers;
pub mod request;
pub mod response;

pub use handlers::{
    create_image_handler, delete_image_handler, list_images_handler, update_image_handler,
};
pub use request::{CreateImageRequest, UpdateImageRequest};
pub use response::{ImageResponse, ImagesResponse};
