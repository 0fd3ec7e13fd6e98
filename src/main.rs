// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use imagestudio_node::api::start_server;
use imagestudio_node::config::AppConfig;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("Starting {}", imagestudio_node::version::get_version_string());
    println!();

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    if config.generation.huggingface_token.is_some() {
        tracing::info!("Hugging Face provider enabled");
    } else {
        tracing::info!("No Hugging Face token set, starting at the public provider tier");
    }
    if !config.has_store() {
        tracing::warn!("No database configured, gallery records will not survive restarts");
    }

    start_server(config).await
}
