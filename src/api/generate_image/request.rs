// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Prompt-only request body shared by the proxy endpoints
///
/// `prompt` is optional at the wire level so a missing field produces a 400
/// with a clear message instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: Option<String>,
}

impl PromptRequest {
    pub fn validate(&self) -> Result<&str, String> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
            _ => Err("Prompt is required".to_string()),
        }
    }
}
