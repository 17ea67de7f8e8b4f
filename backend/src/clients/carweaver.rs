//! CarWeaver (SystemWeaver) component-registry client.
//!
//! Used only by the editor-refresh endpoints, never by generation. The API
//! wants a password-grant bearer token plus a static `user-key` header; the
//! token is cached and refreshed shortly before it expires. Item ids may
//! arrive as full `swap://SystemWeaver:3000/x04...` URLs, of which only the
//! last path segment is the actual id. Item payloads are not uniform across
//! item types, hence the field-name fallbacks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::requests::{ComponentInfo, GenericModuleInfo};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;

const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct CarWeaverClient {
    http: reqwest::Client,
    base_url: String,
    user: String,
    password: String,
    user_key: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: f64,
}

impl CarWeaverClient {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        user: &str,
        password: &str,
        user_key: &str,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            password: password.to_string(),
            user_key: user_key.to_string(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    async fn access_token(&self) -> Result<String, String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() + TOKEN_REFRESH_MARGIN < token.expires_at {
                return Ok(token.access_token.clone());
            }
        }

        let response = self
            .http
            .post(format!("{}/token", self.base_url))
            .header("user-key", &self.user_key)
            .form(&[
                ("username", self.user.as_str()),
                ("password", self.password.as_str()),
                ("grant_type", "password"),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("CarWeaver token request failed: {}", response.status()));
        }
        let token: TokenResponse = response.json().await.map_err(|e| e.to_string())?;

        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs_f64(token.expires_in.max(0.0)),
        });
        Ok(access_token)
    }

    async fn get_item(&self, item_id: &str) -> Result<Value, String> {
        let token = self.access_token().await?;
        let response = self
            .http
            .get(format!("{}/restapi/items/{}", self.base_url, raw_item_id(item_id)))
            .bearer_auth(token)
            .header("user-key", &self.user_key)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("CarWeaver API error: {}", status));
        }
        response.json().await.map_err(|e| e.to_string())
    }

    /// Component fields for the editor refresh: id, persistent id and
    /// version, with blanks where the item does not carry them.
    pub async fn item_info(&self, item_id: &str) -> Result<ComponentInfo, String> {
        let data = self.get_item(item_id).await?;
        Ok(ComponentInfo {
            id: stringified(&data, &["id"]).unwrap_or_else(|| raw_item_id(item_id).to_string()),
            persistent_id: stringified(&data, &["persistent_id", "persistentId"]).unwrap_or_default(),
            version: stringified(&data, &["version", "Version", "versionNumber"]).unwrap_or_default(),
        })
    }

    /// Generic-product-module fields for the editor refresh. The GPM id
    /// lives in the item's attribute map; the item's own id is the fallback.
    pub async fn generic_product_module(&self, item_id: &str) -> Result<GenericModuleInfo, String> {
        let data = self.get_item(item_id).await?;
        let id = data
            .get("attributes")
            .and_then(|attributes| stringified(attributes, &["generic_product_module", "genericProductModule"]))
            .or_else(|| stringified(&data, &["id"]))
            .unwrap_or_default();
        Ok(GenericModuleInfo {
            id,
            version: stringified(&data, &["versionNumber", "version"]).unwrap_or_default(),
        })
    }
}

/// Last path segment of a possibly URL-shaped item id.
fn raw_item_id(item_id: &str) -> &str {
    item_id.rsplit('/').next().unwrap_or(item_id)
}

/// First of the named fields present on `value`, as a string. Versions come
/// back as numbers from some item types.
fn stringified(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}
