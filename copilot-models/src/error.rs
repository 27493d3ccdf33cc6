//! Why a discovery run ended without touching the configuration.

use thiserror::Error;

/// A silent termination of the pipeline. None of these reach the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Skip {
    #[error("credential store unavailable: {0}")]
    CredentialUnavailable(String),
    #[error("no credential record for provider")]
    NoProviderRecord,
    #[error("credential record has no usable token")]
    NoUsableToken,
    #[error("model catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("model catalog is empty")]
    CatalogEmpty,
    #[error("no picker-enabled chat models")]
    NoEntitlement,
    #[error("config shape: {0}")]
    ConfigShape(String),
}

/// Result of one guarded discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The whitelist was written with these model ids.
    Applied(Vec<String>),
    Skipped(Skip),
    /// The deadline fired first; the configuration was not touched.
    TimedOut,
    /// The pipeline task panicked or was cancelled.
    Faulted(String),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}
