//! Gerrit REST client.
//!
//! Only the tag listing is needed: generation turns a project name plus a
//! release tag into the browseable URL of that tag. Gerrit prefixes JSON
//! responses with the `)]}'` XSSI guard, which has to be stripped before
//! parsing, and tag `web_links` may be relative to the server root.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::generator::TagUrlResolver;

#[derive(Clone)]
pub struct GerritClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct TagInfo {
    #[serde(rename = "ref", default)]
    pub ref_name: String,
    #[serde(default)]
    pub web_links: Vec<WebLink>,
}

#[derive(Debug, Deserialize)]
pub struct WebLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl GerritClient {
    pub fn new(http: reqwest::Client, base_url: &str, user: &str, password: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    pub async fn list_tags(&self, project: &str) -> Result<Vec<TagInfo>, String> {
        let encoded = utf8_percent_encode(project, NON_ALPHANUMERIC);
        let url = format!(
            "{}/projects/{}/tags/",
            self.base_url.trim_end_matches('/'),
            encoded
        );
        let response = self
            .http
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        if !status.is_success() {
            return Err(format!("Gerrit API error: {} {}", status, body));
        }
        serde_json::from_str(strip_xssi_prefix(&body)).map_err(|e| e.to_string())
    }

    /// Browse URL of the tag exactly matching `tag`, or `None` when the
    /// project has no such tag (or the tag has no browse link).
    pub async fn tag_url_by_exact_name(
        &self,
        project: &str,
        tag: &str,
    ) -> Result<Option<String>, String> {
        let tags = self.list_tags(project).await?;
        let wanted = format!("refs/tags/{}", tag);
        for info in tags {
            if info.ref_name != wanted {
                continue;
            }
            for link in info.web_links {
                if link.name == "browse" {
                    return Ok(Some(self.absolutize(&link.url)));
                }
            }
        }
        Ok(None)
    }

    fn absolutize(&self, link: &str) -> String {
        if link.starts_with("http") {
            return link.to_string();
        }
        let mut base = self.base_url.trim_end_matches('/');
        // The authenticated API lives under "/a"; browse links do not.
        if let Some(stripped) = base.strip_suffix("/a") {
            base = stripped;
        }
        format!("{}/{}", base, link.trim_start_matches('/'))
    }
}

fn strip_xssi_prefix(body: &str) -> &str {
    match body.strip_prefix(")]}'") {
        Some(rest) => rest.split_once('\n').map(|(_, tail)| tail).unwrap_or(rest),
        None => body,
    }
}

impl TagUrlResolver for GerritClient {
    async fn tag_url(&self, project: &str, tag: &str) -> Result<Option<String>, String> {
        self.tag_url_by_exact_name(project, tag).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tags_body() -> String {
        concat!(
            ")]}'\n",
            r#"[{"ref": "refs/tags/REL_1.0", "revision": "abc", "web_links": ["#,
            r#"{"name": "browse", "url": "/plugins/gitiles/demo/+/refs/tags/REL_1.0"}]},"#,
            r#" {"ref": "refs/tags/REL_0.9", "web_links": []}]"#
        )
        .to_string()
    }

    #[tokio::test]
    async fn strips_xssi_prefix_and_finds_exact_tag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/demo/tags/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(tags_body()))
            .mount(&server)
            .await;

        let client = GerritClient::new(reqwest::Client::new(), &server.uri(), "u", "p");
        let url = client.tag_url_by_exact_name("demo", "REL_1.0").await.unwrap();
        assert_eq!(
            url,
            Some(format!("{}/plugins/gitiles/demo/+/refs/tags/REL_1.0", server.uri()))
        );
    }

    #[tokio::test]
    async fn missing_tag_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/demo/tags/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(tags_body()))
            .mount(&server)
            .await;

        let client = GerritClient::new(reqwest::Client::new(), &server.uri(), "u", "p");
        let url = client.tag_url_by_exact_name("demo", "REL_2.0").await.unwrap();
        assert_eq!(url, None);

        // A tag without a browse link resolves to nothing as well.
        let url = client.tag_url_by_exact_name("demo", "REL_0.9").await.unwrap();
        assert_eq!(url, None);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects/demo/tags/"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let client = GerritClient::new(reqwest::Client::new(), &server.uri(), "u", "p");
        assert!(client.list_tags("demo").await.is_err());
    }

    #[tokio::test]
    async fn absolute_links_pass_through() {
        let server = MockServer::start().await;
        let body = concat!(
            ")]}'\n",
            r#"[{"ref": "refs/tags/v1", "web_links": [{"name": "browse", "url": "https://mirror/x/+/v1"}]}]"#
        );
        Mock::given(method("GET"))
            .and(path("/projects/demo/tags/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = GerritClient::new(reqwest::Client::new(), &server.uri(), "u", "p");
        let url = client.tag_url_by_exact_name("demo", "v1").await.unwrap();
        assert_eq!(url, Some("https://mirror/x/+/v1".to_string()));
    }
}
