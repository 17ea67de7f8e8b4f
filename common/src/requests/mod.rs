//! Request and response payloads exchanged over the REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/generate/swlm`. The package id may arrive as a JSON
/// number or a numeric string, so it is kept raw until validated.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub sw_package_id: Value,
    #[serde(default)]
    pub sw_version: String,
}

/// Query of `GET /api/gerrit/tag_url`.
#[derive(Debug, Deserialize)]
pub struct TagUrlQuery {
    pub project: String,
    pub tag: String,
}

/// Resolved tag location returned by the tag-resolver endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUrl {
    pub url: String,
}

/// Query of `GET /api/artifacts/resolve`.
#[derive(Debug, Deserialize)]
pub struct ArtifactResolveQuery {
    pub name: String,
    pub sw_version: String,
}

/// Delivery metadata for one artifact, as resolved from the artifact store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    pub location: String,
    pub sha256: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Component fields refreshed from the component registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub id: String,
    pub persistent_id: String,
    pub version: String,
}

/// Generic-product-module fields refreshed from the component registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericModuleInfo {
    pub id: String,
    pub version: String,
}
