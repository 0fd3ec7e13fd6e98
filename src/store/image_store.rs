// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image store trait and in-memory mock backend

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::types::{GeneratedImage, NewImage, StoreError};

/// Async record store for [`GeneratedImage`] rows
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// List all records, newest first
    async fn list(&self) -> Result<Vec<GeneratedImage>, StoreError>;

    /// Insert a record; `id`, `liked` and timestamps are store-assigned
    async fn insert(&self, new: NewImage) -> Result<GeneratedImage, StoreError>;

    /// Set the liked flag, bumping `updated_at`
    async fn set_liked(&self, id: &str, liked: bool) -> Result<GeneratedImage, StoreError>;

    /// Delete a record; deleting an id that does not exist is not an error
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-process store used when no backend is configured, and by tests
#[derive(Debug)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<GeneratedImage>>>,
    injected_error: Arc<Mutex<Option<StoreError>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            injected_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Make the next store operation fail with the given error (tests)
    pub async fn inject_error(&self, error: StoreError) {
        *self.injected_error.lock().await = Some(error);
    }

    async fn take_injected_error(&self) -> Option<StoreError> {
        self.injected_error.lock().await.take()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn list(&self) -> Result<Vec<GeneratedImage>, StoreError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }

        let mut records = self.records.lock().await.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn insert(&self, new: NewImage) -> Result<GeneratedImage, StoreError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }

        let now = Utc::now();
        let record = GeneratedImage {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            prompt: new.prompt,
            image_url: new.image_url,
            liked: false,
            created_at: now,
            updated_at: now,
        };
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn set_liked(&self, id: &str, liked: bool) -> Result<GeneratedImage, StoreError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }

        let mut records = self.records.lock().await;
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.liked = liked;
                record.updated_at = Utc::now();
                Ok(record.clone())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        if let Some(error) = self.take_injected_error().await {
            return Err(error);
        }

        self.records.lock().await.retain(|r| r.id != id);
        Ok(())
    }
}
