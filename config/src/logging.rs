//! Tracing initialization for hosts without a subscriber: logs go to a file or nowhere.
//!
//! Reads `RUST_LOG` (filter) and `LOG_FILE` (path). Nothing is ever written to the
//! console, since the host owns the terminal during startup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Env var naming the file that log lines are appended to.
pub const LOG_FILE_ENV: &str = "LOG_FILE";

/// Installs the global subscriber.
///
/// - **RUST_LOG**: filter, e.g. `copilot_models=debug`. Default: `info`.
/// - **LOG_FILE**: when set, plain-text lines are appended there; otherwise output is dropped.
///
/// Fails if the log file cannot be opened or a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter);
        tracing_subscriber::registry().with(file_layer).try_init()?;
        tracing::info!(path = %path, "copilot-models logging to file");
    } else {
        let sink_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::sink)
            .with_filter(filter);
        tracing_subscriber::registry().with(sink_layer).try_init()?;
    }
    Ok(())
}
