use std::time::Duration;

use serde_json::json;
use teams_relay::{config::GlobalConfig, error::ConfigError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetches_service_account_and_level() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "config": {
                "teams": {"user": "svc@example.com"},
                "web": {"logging-level": "WARNING"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let global = GlobalConfig::fetch(&format!("{}/api/config", server.uri()), Duration::from_secs(3))
        .await
        .expect("global config");

    assert_eq!(global.teams_user, "svc@example.com");
    assert_eq!(global.logging_level, "WARNING");
}

#[tokio::test]
async fn error_status_aborts_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = GlobalConfig::fetch(&format!("{}/api/config", server.uri()), Duration::from_secs(3))
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::Status(502)));
}

#[tokio::test]
async fn unreachable_config_service() {
    let err = GlobalConfig::fetch("http://127.0.0.1:1/api/config", Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, ConfigError::Unreachable(_)));
}
