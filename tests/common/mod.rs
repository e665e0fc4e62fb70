#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use serde_json::{Value, json};
use teams_relay::{
    AppState,
    cache::{Clock, TokenCache},
    config::{Config, GlobalConfig},
    graph::GraphChatClient,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SERVICE_UPN: &str = "svc@example.com";
pub const NOW: i64 = 1_700_000_000;

/// 可以手动推进的时钟
pub fn manual_clock(start: i64) -> (Arc<AtomicI64>, Clock) {
    let now = Arc::new(AtomicI64::new(start));
    let handle = now.clone();
    let clock: Clock = Arc::new(move || handle.load(Ordering::SeqCst));
    (now, clock)
}

pub fn token_body(token: &str, validity: i64) -> Value {
    json!({"result": "success", "token": token, "validity": validity})
}

pub fn token_cache(server: &MockServer, clock: Clock) -> TokenCache {
    TokenCache::new(format!("{}/api/token", server.uri()), Duration::from_secs(3))
        .expect("token cache")
        .with_clock(clock)
}

/// 安全服务模拟：总是返回同一个有效令牌
pub async fn mount_token(server: &MockServer, token: &str, validity: i64) {
    Mock::given(method("GET"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(token, validity)))
        .mount(server)
        .await;
}

pub fn app_state(token_server: &MockServer, graph_server: &MockServer, clock: Clock) -> AppState {
    let config = Config {
        token_url: format!("{}/api/token", token_server.uri()),
        graph_base_url: graph_server.uri(),
        ..Config::default()
    };
    let global = GlobalConfig {
        teams_user: SERVICE_UPN.to_string(),
        logging_level: "debug".to_string(),
    };
    let tokens = token_cache(token_server, clock);
    let graph = GraphChatClient::new(graph_server.uri(), Duration::from_secs(5)).expect("graph");
    AppState::new(config, global, tokens, graph)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
