use axum::{
    Router,
    routing::{get, post},
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors};

pub mod chat;
pub mod health;
pub mod message;

/// 创建主路由
pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/message", post(message::send_message))
        .route("/api/chat_list", get(chat::chat_list))
        .route("/api/id", post(chat::chat_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(log_errors)),
        );

    // 开发模式下允许所有来源
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}

/// 只检查键是否存在，非字符串的值按 JSON 文本转发
pub(crate) fn field_text(body: Option<&Value>, key: &str) -> Option<String> {
    match body?.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
