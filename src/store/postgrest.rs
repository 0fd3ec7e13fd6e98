// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! PostgREST-backed image store (Supabase `generated_images` table)

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::image_store::ImageStore;
use super::types::{GeneratedImage, NewImage, StoreError};
use crate::config::SupabaseConfig;

const TABLE: &str = "generated_images";

/// Record store speaking the Supabase PostgREST API
pub struct PostgrestStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl PostgrestStore {
    pub fn new(config: &SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse a PostgREST row-set response, expecting exactly one row
    async fn single_row(response: reqwest::Response) -> Result<GeneratedImage, StoreError> {
        let rows: Vec<GeneratedImage> = response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound("no rows returned".to_string()))
    }
}

#[async_trait]
impl ImageStore for PostgrestStore {
    async fn list(&self) -> Result<Vec<GeneratedImage>, StoreError> {
        debug!("PostgREST list GET {}", self.table_url());

        let response = self
            .request(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    async fn insert(&self, new: NewImage) -> Result<GeneratedImage, StoreError> {
        debug!("PostgREST insert POST {}", self.table_url());

        let body = json!({
            "user_id": new.user_id,
            "prompt": new.prompt,
            "image_url": new.image_url,
            "liked": false,
        });

        let response = self
            .request(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        Self::single_row(response).await
    }

    async fn set_liked(&self, id: &str, liked: bool) -> Result<GeneratedImage, StoreError> {
        debug!("PostgREST update PATCH {} id={}", self.table_url(), id);

        let body = json!({
            "liked": liked,
            "updated_at": Utc::now(),
        });

        let response = self
            .request(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        Self::single_row(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        debug!("PostgREST delete DELETE {} id={}", self.table_url(), id);

        let response = self
            .request(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Self::check_status(response).await?;
        Ok(())
    }
}
