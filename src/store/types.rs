// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Record types and errors for the image store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder user until authentication is wired through
pub const ANONYMOUS_USER_ID: &str = "00000000-0000-0000-0000-000000000000";

/// One persisted generation or upload result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Assigned by the storage layer
    pub id: String,
    pub user_id: String,
    pub prompt: String,
    /// Remote URL or embedded `data:` URI
    pub image_url: String,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a record; everything else is store-assigned
#[derive(Debug, Clone)]
pub struct NewImage {
    pub user_id: String,
    pub prompt: String,
    pub image_url: String,
}

impl NewImage {
    /// New record for the anonymous user, prompt trimmed
    pub fn anonymous(prompt: &str, image_url: impl Into<String>) -> Self {
        Self {
            user_id: ANONYMOUS_USER_ID.to_string(),
            prompt: prompt.trim().to_string(),
            image_url: image_url.into(),
        }
    }
}

/// Errors from the record store or object storage
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}
