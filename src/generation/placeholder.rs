// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Deterministic placeholder images for the terminal cascade tiers
//!
//! The seeded placeholder performs no network I/O: the URL is handed back
//! unfetched, so this tier cannot itself fail.

use url::Url;

const SEEDED_BASE_URL: &str = "https://picsum.photos";
const EMERGENCY_BASE_URL: &str = "https://via.placeholder.com/1024x1024/6366f1/ffffff";

/// Maximum prompt length embedded in the emergency placeholder text
const EMERGENCY_PROMPT_CHARS: usize = 20;

/// Derive a numeric seed from a prompt by summing its character codes.
///
/// Wrapping addition keeps the result deterministic for arbitrarily long
/// prompts.
pub fn prompt_seed(prompt: &str) -> u32 {
    prompt.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32))
}

/// Seeded placeholder URL at the requested dimensions.
///
/// The same prompt always yields the same seed and therefore the same URL.
pub fn seeded_url(prompt: &str, width: u32, height: u32) -> String {
    format!(
        "{}/seed/{}/{}/{}",
        SEEDED_BASE_URL,
        prompt_seed(prompt),
        width,
        height
    )
}

/// Static placeholder-text URL embedding a truncated, sanitized prompt.
///
/// Only used when an error escapes the whole generation pipeline.
pub fn emergency_url(prompt: &str) -> String {
    let safe = if prompt.trim().is_empty() {
        "AI Image"
    } else {
        prompt
    };
    let short: String = if safe.chars().count() > EMERGENCY_PROMPT_CHARS {
        let truncated: String = safe.chars().take(EMERGENCY_PROMPT_CHARS).collect();
        format!("{}...", truncated)
    } else {
        safe.to_string()
    };

    let mut url = Url::parse(EMERGENCY_BASE_URL).expect("static placeholder URL");
    url.query_pairs_mut()
        .append_pair("text", &format!("AI Image: {}", short));
    url.to_string()
}
