//! Shared application state.
//!
//! One `AppState` is built at startup from the environment configuration and
//! injected into every handler as `web::Data`. It bundles the profile store
//! and the clients for the three external collaborators; cloning is cheap
//! (the underlying HTTP connection pool is shared).

use crate::clients::{ArtifactoryClient, CarWeaverClient, GerritClient};
use crate::config::Config;
use crate::store::ProfileStore;

#[derive(Clone)]
pub struct AppState {
    pub store: ProfileStore,
    pub gerrit: GerritClient,
    pub artifactory: ArtifactoryClient,
    pub carweaver: CarWeaverClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            store: ProfileStore::new(&config.profile_db),
            gerrit: GerritClient::new(
                http.clone(),
                &config.gerrit_url,
                &config.gerrit_user,
                &config.gerrit_pass,
            ),
            artifactory: ArtifactoryClient::new(
                http.clone(),
                &config.artifactory_base_url,
                &config.artifactory_token,
                &config.artifactory_repo,
            ),
            carweaver: CarWeaverClient::new(
                http,
                &config.carweaver_url,
                &config.carweaver_user,
                &config.carweaver_pass,
                &config.carweaver_key,
            ),
        }
    }
}
