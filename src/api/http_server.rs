// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::flux_generate::flux_generate_handler;
use super::generate_image::{generate_image_handler, generate_image_url_handler};
use super::images::{
    create_image_handler, delete_image_handler, list_images_handler, update_image_handler,
};
use super::upload_image::upload_image_handler;
use crate::config::AppConfig;
use crate::generation::{GenerationService, LongcatClient};
use crate::store::{BucketClient, ImageStore, MemoryStore, PostgrestStore};

/// Shared state handed to every request handler
pub struct AppState {
    pub generation: GenerationService,
    pub longcat: LongcatClient,
    pub store: Arc<dyn ImageStore>,
    /// Object storage for uploads; absent when no backend is configured
    pub bucket: Option<BucketClient>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let store: Arc<dyn ImageStore> = match &config.supabase {
            Some(supabase) => Arc::new(PostgrestStore::new(supabase)),
            None => {
                warn!("No backing store configured, gallery records are in-memory only");
                Arc::new(MemoryStore::new())
            }
        };
        let bucket = config.supabase.as_ref().map(BucketClient::new);

        Self {
            generation: GenerationService::new(&config.generation),
            longcat: LongcatClient::new(&config.longcat),
            store,
            bucket,
        }
    }

    /// In-memory state with an empty provider cascade (tests)
    pub fn new_for_test() -> Self {
        let config = AppConfig::default();
        Self {
            generation: GenerationService::with_providers(vec![]),
            longcat: LongcatClient::new(&config.longcat),
            store: Arc::new(MemoryStore::new()),
            bucket: None,
        }
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Generation endpoints
        .route("/api/generate-image", post(generate_image_handler))
        .route("/api/generate-image-url", post(generate_image_url_handler))
        .route("/api/flux-generate", post(flux_generate_handler))
        // Gallery CRUD
        .route(
            "/api/images",
            get(list_images_handler).post(create_image_handler),
        )
        .route(
            "/api/images/:id",
            put(update_image_handler).delete(delete_image_handler),
        )
        // Uploads
        .route("/api/upload-image", post(upload_image_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config));
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": crate::version::get_version_info(),
        "providers": state.generation.available_providers(),
        "store_configured": state.bucket.is_some(),
    }))
}
