//! Discovery settings: provider key, catalog endpoint, and the two time budgets.

use std::path::PathBuf;
use std::time::Duration;

/// Provider key in both the credential store and the host configuration.
pub const DEFAULT_PROVIDER_ID: &str = "github-copilot";

/// Model catalog endpoint.
pub const DEFAULT_MODELS_URL: &str = "https://api.githubcopilot.com/models";

/// Value sent in the `Copilot-Integration-Id` header.
pub const DEFAULT_INTEGRATION_ID: &str = "vscode-chat";

/// Deadline of the catalog request itself.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(4000);

/// Deadline of the whole discovery run.
pub const DEFAULT_DEADLINE: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    pub provider_id: String,
    pub models_url: String,
    pub integration_id: String,
    pub request_timeout: Duration,
    pub deadline: Duration,
    /// Base data directory; `None` resolves `$XDG_DATA_HOME` / `~/.local/share` per run.
    pub data_dir: Option<PathBuf>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            provider_id: DEFAULT_PROVIDER_ID.to_string(),
            models_url: DEFAULT_MODELS_URL.to_string(),
            integration_id: DEFAULT_INTEGRATION_ID.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            deadline: DEFAULT_DEADLINE,
            data_dir: None,
        }
    }
}

impl DiscoverySettings {
    pub fn with_models_url(mut self, url: impl Into<String>) -> Self {
        self.models_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Read the credential store from `<dir>/opencode/auth.json` instead of the environment default.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_copilot() {
        let s = DiscoverySettings::default();
        assert_eq!(s.provider_id, "github-copilot");
        assert_eq!(s.models_url, "https://api.githubcopilot.com/models");
        assert_eq!(s.request_timeout, Duration::from_secs(4));
        assert_eq!(s.deadline, Duration::from_secs(5));
        assert!(s.data_dir.is_none());
    }

    #[test]
    fn builders_override_fields() {
        let s = DiscoverySettings::default()
            .with_models_url("http://127.0.0.1:9/models")
            .with_deadline(Duration::from_millis(50))
            .with_data_dir("/tmp/data");
        assert_eq!(s.models_url, "http://127.0.0.1:9/models");
        assert_eq!(s.deadline, Duration::from_millis(50));
        assert_eq!(s.data_dir.as_deref(), Some(std::path::Path::new("/tmp/data")));
    }
}
