//! Artifactory client.
//!
//! Artifacts are located with an AQL property search scoped to one
//! repository; exactly one match is expected, anything else is an error the
//! caller can surface. Checksums come from the storage API, keyed by the
//! repo-relative path of the already-resolved download URL.

use common::requests::ArtifactMeta;
use common::version::release_segment;
use serde::Deserialize;

use crate::generator::ArtifactMetaResolver;

#[derive(Clone)]
pub struct ArtifactoryClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    repo: String,
}

#[derive(Debug, Deserialize)]
struct AqlResponse {
    #[serde(default)]
    results: Vec<AqlItem>,
}

#[derive(Debug, Deserialize)]
struct AqlItem {
    repo: String,
    path: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct StorageInfo {
    #[serde(default)]
    checksums: Checksums,
}

#[derive(Debug, Default, Deserialize)]
struct Checksums {
    #[serde(default)]
    sha256: String,
}

impl ArtifactoryClient {
    pub fn new(http: reqwest::Client, base_url: &str, token: &str, repo: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            repo: repo.to_string(),
        }
    }

    /// Full download URL of the single artifact matching the given
    /// properties. Zero or multiple matches are errors.
    pub async fn find_artifact_by_properties(
        &self,
        properties: &[(&str, String)],
    ) -> Result<String, String> {
        let mut conditions = vec![
            format!("\"repo\": \"{}\"", self.repo),
            "\"type\": \"file\"".to_string(),
        ];
        conditions.extend(
            properties
                .iter()
                .map(|(key, value)| format!("\"@{}\": \"{}\"", key, value)),
        );
        let query = format!("items.find({{{}}})", conditions.join(", "));

        let response = self
            .http
            .post(format!("{}/api/search/aql", self.base_url))
            .bearer_auth(&self.token)
            .header("Content-Type", "text/plain")
            .body(query)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Failed to search by properties: {} {}", status, body));
        }
        let found: AqlResponse = response.json().await.map_err(|e| e.to_string())?;

        let mut urls: Vec<String> = found
            .results
            .iter()
            .map(|item| format!("{}/{}/{}/{}", self.base_url, item.repo, item.path, item.name))
            .collect();
        match urls.len() {
            1 => Ok(urls.remove(0)),
            0 => Err("No artifact found matching the given properties.".to_string()),
            n => Err(format!("Multiple ({}) artifacts found, but exactly one expected", n)),
        }
    }

    /// Checksum of an artifact by its full download URL. Best effort: any
    /// failure, including a URL outside this instance, yields an empty
    /// string.
    pub async fn sha256_for_url(&self, full_url: &str) -> String {
        let Some(rel) = full_url.strip_prefix(&format!("{}/", self.base_url)) else {
            return String::new();
        };
        let Some((repo, path)) = rel.split_once('/') else {
            return String::new();
        };
        let response = self
            .http
            .get(format!("{}/api/storage/{}/{}", self.base_url, repo, path))
            .bearer_auth(&self.token)
            .send()
            .await;
        match response {
            Ok(response) if response.status().is_success() => response
                .json::<StorageInfo>()
                .await
                .map(|info| info.checksums.sha256)
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Delivery metadata for a named artifact at a given SW version.
    pub async fn resolve(&self, name: &str, sw_version: &str) -> Result<ArtifactMeta, String> {
        let properties = aql_properties(name, sw_version)
            .ok_or_else(|| format!("Unknown artifact name: {}", name))?;
        let location = self.find_artifact_by_properties(&properties).await?;
        let sha256 = self.sha256_for_url(&location).await;
        Ok(ArtifactMeta {
            location,
            sha256,
            version: None,
        })
    }
}

/// AQL property set for each name in the artifact enumeration. SWLM builds
/// are keyed by the full baseline version, the SWP packages by the numeric
/// release segment.
fn aql_properties(name: &str, sw_version: &str) -> Option<Vec<(&'static str, String)>> {
    let release = release_segment(sw_version).to_string();
    match name {
        "SUM SWLM" => Some(vec![
            ("baseline.sw.version", sw_version.to_string()),
            ("type", "swlm".to_string()),
        ]),
        "SUM SWP1" => Some(vec![("release", release), ("type", "swp1".to_string())]),
        "SUM SWP2" => Some(vec![("release", release), ("type", "swp2".to_string())]),
        "SUM SWP4" => Some(vec![("release", release), ("type", "swp4".to_string())]),
        _ => None,
    }
}

impl ArtifactMetaResolver for ArtifactoryClient {
    async fn artifact_meta(&self, name: &str, sw_version: &str) -> Result<ArtifactMeta, String> {
        self.resolve(name, sw_version).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ArtifactoryClient {
        ArtifactoryClient::new(reqwest::Client::new(), &server.uri(), "token", "ARTBC-SUM-LTS")
    }

    #[tokio::test]
    async fn single_match_yields_full_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search/aql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "repo": "ARTBC-SUM-LTS", "path": "sum/1.0/vbf", "name": "sum1.vbf" }]
            })))
            .mount(&server)
            .await;

        let url = client(&server)
            .find_artifact_by_properties(&[("release", "1.0".to_string())])
            .await
            .unwrap();
        assert_eq!(url, format!("{}/ARTBC-SUM-LTS/sum/1.0/vbf/sum1.vbf", server.uri()));
    }

    #[tokio::test]
    async fn zero_or_many_matches_are_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search/aql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        let result = client(&server)
            .find_artifact_by_properties(&[("release", "1.0".to_string())])
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn checksum_is_read_from_storage_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/storage/ARTBC-SUM-LTS/sum/1.0/vbf/sum1.vbf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "checksums": { "sha256": "abc123" }
            })))
            .mount(&server)
            .await;

        let c = client(&server);
        let url = format!("{}/ARTBC-SUM-LTS/sum/1.0/vbf/sum1.vbf", server.uri());
        assert_eq!(c.sha256_for_url(&url).await, "abc123");
    }

    #[tokio::test]
    async fn foreign_urls_yield_empty_checksum() {
        let server = MockServer::start().await;
        let c = client(&server);
        assert_eq!(c.sha256_for_url("https://elsewhere/repo/a/b.vbf").await, "");
    }

    #[tokio::test]
    async fn resolve_rejects_unknown_names() {
        let server = MockServer::start().await;
        assert!(client(&server).resolve("SUM SWP3", "REL_1.0").await.is_err());
    }
}
