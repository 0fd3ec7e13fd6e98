// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration loaded from environment variables

use std::env;

/// Top-level configuration for the node
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP API listens on
    pub api_port: u16,
    /// Provider cascade configuration
    pub generation: GenerationConfig,
    /// Hosted backing store (record table + object storage), if configured
    pub supabase: Option<SupabaseConfig>,
    /// Chat-completion proxy configuration
    pub longcat: LongcatConfig,
}

/// Configuration for the image-generation provider cascade
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Bearer token for the Hugging Face inference API (tier 1)
    pub huggingface_token: Option<String>,
    /// Per-variant timeout for Pollinations requests (tier 2)
    pub pollinations_timeout_secs: u64,
}

/// Connection settings for the hosted Supabase backend
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. https://xyz.supabase.co
    pub url: String,
    /// Service-role key used for both the apikey header and bearer auth
    pub service_key: String,
    /// Object storage bucket for uploaded images
    pub bucket: String,
}

/// Settings for the LongCat chat-completion proxy
#[derive(Debug, Clone)]
pub struct LongcatConfig {
    pub api_url: String,
    /// Session cookie; requests go out without one when empty
    pub cookie: String,
}

pub const DEFAULT_LONGCAT_API_URL: &str = "https://longcat.chat/api/v1/chat-completion";
pub const DEFAULT_BUCKET: &str = "generated-images";

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // The upstream dashboard template ships this literal; treat it as unset.
        let huggingface_token = env::var("HUGGINGFACE_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty() && t != "your-token-here");

        let supabase = match (env::var("SUPABASE_URL"), env::var("SUPABASE_SERVICE_ROLE_KEY")) {
            (Ok(url), Ok(service_key)) if !url.is_empty() && !service_key.is_empty() => {
                Some(SupabaseConfig {
                    url: url.trim_end_matches('/').to_string(),
                    service_key,
                    bucket: env::var("SUPABASE_BUCKET")
                        .unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
                })
            }
            _ => None,
        };

        Self {
            api_port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            generation: GenerationConfig {
                huggingface_token,
                pollinations_timeout_secs: env::var("POLLINATIONS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
            },
            supabase,
            longcat: LongcatConfig {
                api_url: env::var("LONGCAT_API_URL")
                    .unwrap_or_else(|_| DEFAULT_LONGCAT_API_URL.to_string()),
                cookie: env::var("LONGCAT_COOKIE").unwrap_or_default(),
            },
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generation.pollinations_timeout_secs == 0 {
            return Err("Pollinations timeout must be greater than 0".to_string());
        }
        if self.longcat.api_url.is_empty() {
            return Err("LongCat API URL must not be empty".to_string());
        }
        Ok(())
    }

    /// Check if a persistent backing store is configured
    pub fn has_store(&self) -> bool {
        self.supabase.is_some()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 8080,
            generation: GenerationConfig {
                huggingface_token: None,
                pollinations_timeout_secs: 15,
            },
            supabase: None,
            longcat: LongcatConfig {
                api_url: DEFAULT_LONGCAT_API_URL.to_string(),
                cookie: String::new(),
            },
        }
    }
}
