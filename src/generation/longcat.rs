// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! LongCat chat-completion proxy client
//!
//! A single-provider generation path with no fallback chain: the prompt is
//! relayed to a chat-completion endpoint, image URLs are pattern-matched out
//! of the event-stream-ish response body, and failures surface to the
//! caller as errors.

use anyhow::Result;
use bytes::Bytes;
use regex::Regex;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::LongcatConfig;

/// Client for the LongCat chat-completion image endpoint
pub struct LongcatClient {
    client: Client,
    api_url: String,
    cookie: String,
}

impl LongcatClient {
    pub fn new(config: &LongcatConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.clone(),
            cookie: config.cookie.clone(),
        }
    }

    /// Send a generation request and return the raw response body
    pub async fn request_completion(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "agentId": "genImage",
            "content": prompt,
            "conversationId": "6a099a5e-fa80-4cb5-8de7-611f292c23cc",
            "creationParam": { "width": 2, "height": 3, "style": "" },
            "files": [],
            "parentMessageId": 0,
            "reasonEnabled": 0,
            "searchEnabled": 0,
        });

        debug!("LongCat generate POST {}", self.api_url);

        let mut builder = self
            .client
            .post(&self.api_url)
            .header("Accept", "text/event-stream,application/json")
            .header("m-appkey", "fe_com.sankuai.friday.fe.longcat")
            .json(&payload);
        if !self.cookie.is_empty() {
            builder = builder.header("Cookie", &self.cookie);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow::anyhow!("LongCat API error: {}", status));
        }

        let body = response.text().await?;
        debug!("LongCat response received, length: {}", body.len());
        Ok(body)
    }

    /// Fetch the bytes behind an extracted image URL
    pub async fn fetch_image(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Failed to fetch image: {}",
                response.status()
            ));
        }

        Ok(response.bytes().await?)
    }
}

/// Extract `https` image URLs from a chat-completion response body.
///
/// The body is a sequence of JSON events; rather than parsing each frame,
/// URLs are matched directly on `"url":"https:..."` fields.
pub fn extract_image_urls(body: &str) -> Vec<String> {
    let pattern = Regex::new(r#""url":"(https:[^"]+)""#).expect("valid URL pattern");
    pattern
        .captures_iter(body)
        .map(|captures| captures[1].to_string())
        .collect()
}
