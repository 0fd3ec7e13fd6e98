// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Placeholder URL behavior across prompt shapes

use imagestudio_node::generation::placeholder::{emergency_url, prompt_seed, seeded_url};

#[test]
fn test_seed_handles_unicode_prompts() {
    // Multi-byte characters sum by code point, not by byte
    let seed = prompt_seed("🎈");
    assert_eq!(seed, 0x1F388);
}

#[test]
fn test_seed_survives_very_long_prompts() {
    let long_prompt = "x".repeat(100_000);
    // Must not panic on overflow; 'x' = 120
    let seed = prompt_seed(&long_prompt);
    assert_eq!(seed, 120u32.wrapping_mul(100_000));
}

#[test]
fn test_seeded_url_uses_requested_dimensions() {
    let url = seeded_url("a red balloon", 640, 480);
    assert_eq!(url, "https://picsum.photos/seed/1219/640/480");
}

#[test]
fn test_emergency_url_is_query_encoded() {
    let url = emergency_url("cats & dogs");
    // Ampersand in the prompt must not break the query string
    assert!(url.contains("cats+%26+dogs"));
}
