//! Model catalog: fetch `GET /models` with the bearer token and decode `{ data: [...] }`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Skip;
use crate::settings::DiscoverySettings;
use crate::truthy::deserialize_truthy;

/// Fetches a URL with headers. Abstraction for testing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url` and return the body of a success response; any other status is an error.
    async fn get(&self, url: &str, headers: &[(&'static str, String)]) -> Result<String, String>;
}

/// Reqwest-based HTTP client with a per-request deadline.
///
/// A client that failed to build is kept as its error and reported by every `get`, so the
/// failure surfaces inside the guarded run instead of at construction.
pub struct ReqwestHttpClient {
    client: Result<reqwest::Client, String>,
}

impl ReqwestHttpClient {
    /// Client whose requests are aborted after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("build http client: {}", e));
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &[(&'static str, String)]) -> Result<String, String> {
        let client = self.client.as_ref().map_err(Clone::clone)?;
        let mut req = client.get(url);
        for (name, value) in headers {
            req = req.header(*name, value);
        }
        let body = req
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())?;
        Ok(body)
    }
}

/// One catalog entry as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    /// Truthiness of the reported flag; `1` or `"yes"` count as enabled.
    #[serde(
        default,
        deserialize_with = "deserialize_truthy",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_picker_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Capabilities>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ModelDescriptor {
    /// Capability type, e.g. `"chat"` or `"embeddings"`.
    pub fn capability_type(&self) -> Option<&str> {
        self.capabilities.as_ref()?.kind.as_deref()
    }
}

/// Request headers for the catalog call.
pub fn catalog_headers(token: &str, integration_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Authorization", format!("Bearer {}", token)),
        ("Copilot-Integration-Id", integration_id.to_string()),
        ("Content-Type", "application/json".to_string()),
    ]
}

/// Decodes a catalog body. Entries that do not decode are dropped; the rest are kept in order.
///
/// A body that is not JSON is `CatalogUnavailable`; a missing, non-array or empty `data`
/// is `CatalogEmpty`.
pub fn parse_catalog(body: &str) -> Result<Vec<ModelDescriptor>, Skip> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| Skip::CatalogUnavailable(e.to_string()))?;
    let entries = match json.get("data").and_then(Value::as_array) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(Skip::CatalogEmpty),
    };

    let mut models = Vec::with_capacity(entries.len());
    for entry in entries {
        match ModelDescriptor::deserialize(entry) {
            Ok(model) => models.push(model),
            Err(e) => tracing::debug!(error = %e, "skipping undecodable catalog entry"),
        }
    }
    Ok(models)
}

/// Issues the single catalog request for `token` and decodes the response.
pub async fn fetch_catalog(
    client: &dyn HttpClient,
    settings: &DiscoverySettings,
    token: &str,
) -> Result<Vec<ModelDescriptor>, Skip> {
    let headers = catalog_headers(token, &settings.integration_id);
    let body = client
        .get(&settings.models_url, &headers)
        .await
        .map_err(Skip::CatalogUnavailable)?;
    parse_catalog(&body)
}
