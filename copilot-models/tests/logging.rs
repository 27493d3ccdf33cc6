//! Tracing file output from the config crate's `tracing-init` feature.

use copilot_models::{Discovery, DiscoverySettings, Outcome};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn discovery_events_reach_log_file() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_path = log_dir.path().join("copilot-models.log");
    std::env::set_var("LOG_FILE", &log_path);
    std::env::set_var("RUST_LOG", "copilot_models=debug,copilot_models_config=info");
    env_config::logging::init().unwrap();

    let data_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(data_dir.path().join("opencode")).unwrap();
    std::fs::write(
        data_dir.path().join("opencode").join("auth.json"),
        r#"{"github-copilot":{"access":"gho_abc"}}"#,
    )
    .unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "gpt-x", "model_picker_enabled": true, "capabilities": {"type": "chat"}}]
        })))
        .mount(&server)
        .await;

    let settings = DiscoverySettings::default()
        .with_data_dir(data_dir.path())
        .with_models_url(format!("{}/models", server.uri()));
    let mut config = json!({});
    let outcome = Discovery::new(settings).run(&mut config).await;
    assert!(matches!(outcome, Outcome::Applied(_)));

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("copilot-models logging to file"), "log: {}", log);
    assert!(log.contains("applied copilot model whitelist"), "log: {}", log);
    assert!(!log.contains('\u{1b}'), "log has ANSI escapes: {}", log);
}
