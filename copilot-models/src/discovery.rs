//! Bounded discovery run: credential -> token -> catalog -> allow-list -> config.
//!
//! The network half runs as its own task raced against the deadline. Only the final
//! merge touches the configuration, and it happens after the task has delivered its
//! allow-list and before [`Discovery::run`] returns. A timed-out task is detached and
//! ends at its own request deadline; it holds no reference to the configuration.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{select_token, CredentialStore};
use crate::catalog::{fetch_catalog, HttpClient, ReqwestHttpClient};
use crate::error::{Outcome, Skip};
use crate::filter::entitled_models;
use crate::merge::apply_whitelist;
use crate::settings::DiscoverySettings;

/// Discovers entitled models for the stored credential and narrows the provider whitelist.
#[derive(Clone)]
pub struct Discovery {
    settings: Arc<DiscoverySettings>,
    http_client: Arc<dyn HttpClient>,
}

impl Discovery {
    /// Reqwest client bounded by `settings.request_timeout`.
    pub fn new(settings: DiscoverySettings) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(settings.request_timeout));
        Self::with_client(settings, http_client)
    }

    /// Custom HTTP client, e.g. a mock.
    pub fn with_client(settings: DiscoverySettings, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            settings: Arc::new(settings),
            http_client,
        }
    }

    pub fn settings(&self) -> &DiscoverySettings {
        &self.settings
    }

    /// Runs every read-only step and returns the non-empty allow-list.
    ///
    /// Re-reads the credential file and re-fetches the catalog on every call.
    pub async fn resolve_allow_list(&self) -> Result<Vec<String>, Skip> {
        let raw = env_config::load_default_auth_store(self.settings.data_dir.as_deref())
            .await
            .map_err(|e| Skip::CredentialUnavailable(e.to_string()))?;
        let store = CredentialStore::from_value(raw);
        let token = select_token(&store, &self.settings.provider_id)?;
        let catalog = fetch_catalog(self.http_client.as_ref(), &self.settings, &token).await?;
        entitled_models(&catalog)
    }

    /// Guarded run. Never panics or errors; the config is either untouched or has exactly
    /// `provider.<id>.whitelist` set to a non-empty list.
    pub async fn run(&self, config: &mut Value) -> Outcome {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(error = %e, "copilot model discovery needs a tokio runtime");
                return Outcome::Faulted(e.to_string());
            }
        };

        let this = self.clone();
        let task = runtime.spawn(async move { this.resolve_allow_list().await });

        let models = match tokio::time::timeout(self.settings.deadline, task).await {
            Err(_) => {
                tracing::warn!(
                    deadline_ms = self.settings.deadline.as_millis() as u64,
                    "copilot model discovery timed out"
                );
                return Outcome::TimedOut;
            }
            Ok(Err(join_err)) => {
                tracing::warn!(error = %join_err, "copilot model discovery task failed");
                return Outcome::Faulted(join_err.to_string());
            }
            Ok(Ok(Err(skip))) => {
                tracing::debug!(reason = %skip, "copilot model discovery skipped");
                return Outcome::Skipped(skip);
            }
            Ok(Ok(Ok(models))) => models,
        };

        match apply_whitelist(config, &self.settings.provider_id, &models) {
            Ok(()) => {
                tracing::info!(
                    provider = %self.settings.provider_id,
                    count = models.len(),
                    "applied copilot model whitelist"
                );
                Outcome::Applied(models)
            }
            Err(skip) => {
                tracing::debug!(reason = %skip, "copilot model whitelist not applied");
                Outcome::Skipped(skip)
            }
        }
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new(DiscoverySettings::default())
    }
}
