//! Runtime configuration, read once at startup from the process environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_host: String,
    pub bind_port: u16,
    /// Path of the SQLite profile store.
    pub profile_db: String,
    pub gerrit_url: String,
    pub gerrit_user: String,
    pub gerrit_pass: String,
    pub artifactory_base_url: String,
    pub artifactory_token: String,
    pub artifactory_repo: String,
    pub carweaver_url: String,
    pub carweaver_user: String,
    pub carweaver_pass: String,
    pub carweaver_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_host: var_or("BIND_HOST", "127.0.0.1"),
            bind_port: env::var("BIND_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
            profile_db: var_or("PROFILE_DB", "profiles.sqlite"),
            gerrit_url: var_or("GERRIT_URL", ""),
            gerrit_user: var_or("GERRIT_USER", ""),
            gerrit_pass: var_or("GERRIT_PASS", ""),
            artifactory_base_url: var_or("ARTIFACTORY_BASE_URL", ""),
            artifactory_token: var_or("ARTIFACTORY_TOKEN", ""),
            artifactory_repo: var_or("ARTIFACTORY_REPO", "ARTBC-SUM-LTS"),
            carweaver_url: var_or("CARWEAVER_URL", ""),
            carweaver_user: var_or("CARWEAVER_USER", ""),
            carweaver_pass: var_or("CARWEAVER_PASS", ""),
            carweaver_key: var_or("CARWEAVER_KEY", ""),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
