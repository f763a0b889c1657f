//! API-level metadata for the generated header.

use serde::Deserialize;

/// Metadata about the API the registry snapshot describes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API name (e.g. "vulkan").
    pub name: String,
    /// API header included by the generated file (e.g. "vulkan/vulkan.h").
    pub header: String,
    /// Nested namespace components wrapping the generated declarations.
    #[serde(default = "default_namespace")]
    pub namespace: Vec<String>,
}

fn default_namespace() -> Vec<String> {
    vec!["capture".to_string(), "encode".to_string()]
}
