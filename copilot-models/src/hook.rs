//! Host integration: the configuration hook the host awaits during startup.

use async_trait::async_trait;
use serde_json::Value;

use crate::discovery::Discovery;
use crate::settings::DiscoverySettings;

/// Called by the host with its mutable configuration before startup completes.
///
/// Implementations must return within bounded time and must not fail.
#[async_trait]
pub trait ConfigHook: Send + Sync {
    async fn config(&self, config: &mut Value);
}

/// Narrows `provider.github-copilot.whitelist` to the models the stored credential can use.
#[derive(Clone, Default)]
pub struct CopilotModelsPlugin {
    discovery: Discovery,
}

impl CopilotModelsPlugin {
    pub const NAME: &'static str = "copilot-models";

    pub fn new(settings: DiscoverySettings) -> Self {
        Self {
            discovery: Discovery::new(settings),
        }
    }

    pub fn with_discovery(discovery: Discovery) -> Self {
        Self { discovery }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }
}

#[async_trait]
impl ConfigHook for CopilotModelsPlugin {
    async fn config(&self, config: &mut Value) {
        let outcome = self.discovery.run(config).await;
        tracing::debug!(plugin = Self::NAME, ?outcome, "config hook finished");
    }
}
