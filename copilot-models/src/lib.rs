//! Startup configuration enricher for the `github-copilot` provider.
//!
//! Reads the OAuth credential that OpenCode stored in `auth.json`, asks the Copilot
//! model catalog which models that credential may use, keeps the picker-enabled chat
//! models and writes them to `provider["github-copilot"].whitelist` in the host config.
//!
//! Every failure is silent: the config is left untouched and the hook returns within the
//! deadline (5 s by default; the catalog request itself is bounded at 4 s).
//!
//! # Example
//!
//! ```ignore
//! use copilot_models::{ConfigHook, CopilotModelsPlugin};
//!
//! let plugin = CopilotModelsPlugin::default();
//! let mut config = serde_json::json!({ "model": "github-copilot/gpt-4o" });
//! plugin.config(&mut config).await;
//! ```

mod auth;
mod catalog;
mod discovery;
mod error;
mod filter;
mod hook;
mod merge;
mod settings;
mod truthy;

pub use auth::{select_token, CredentialRecord, CredentialStore};
pub use catalog::{
    catalog_headers, fetch_catalog, parse_catalog, Capabilities, HttpClient, ModelDescriptor,
    ReqwestHttpClient,
};
pub use discovery::Discovery;
pub use error::{Outcome, Skip};
pub use filter::{entitled_models, is_entitled, CHAT_CAPABILITY};
pub use hook::{ConfigHook, CopilotModelsPlugin};
pub use merge::{apply_whitelist, PROVIDER_KEY, WHITELIST_KEY};
pub use settings::{
    DiscoverySettings, DEFAULT_DEADLINE, DEFAULT_INTEGRATION_ID, DEFAULT_MODELS_URL,
    DEFAULT_PROVIDER_ID, DEFAULT_REQUEST_TIMEOUT,
};
