// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Persistence for generated images: record store and object storage

pub mod image_store;
pub mod object_storage;
pub mod postgrest;
pub mod types;

pub use image_store::{ImageStore, MemoryStore};
pub use object_storage::BucketClient;
pub use postgrest::PostgrestStore;
pub use types::{GeneratedImage, NewImage, StoreError, ANONYMOUS_USER_ID};
