// Version information for the Imagestudio Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-provider-cascade-2026-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-08-30";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "provider-cascade",
    "seeded-placeholder",
    "chat-completion-proxy",
    "gallery-crud",
    "object-storage-upload",
    "base64-inline-fallback",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Imagestudio Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
