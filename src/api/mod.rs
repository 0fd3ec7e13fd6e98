// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod flux_generate;
pub mod generate_image;
pub mod http_server;
pub mod images;
pub mod upload_image;

pub use errors::{ApiError, ErrorResponse};
pub use flux_generate::{
    flux_generate_handler, EmergencyResponse, FluxGenerateRequest, FluxGenerateResponse,
};
pub use generate_image::{
    generate_image_handler, generate_image_url_handler, ImageUrlsResponse, PromptRequest,
};
pub use http_server::{create_app, start_server, AppState};
pub use images::{
    create_image_handler, delete_image_handler, list_images_handler, update_image_handler,
    CreateImageRequest, ImageResponse, ImagesResponse, UpdateImageRequest,
};
pub use upload_image::{upload_image_handler, UploadImageResponse, UploadedImage};
