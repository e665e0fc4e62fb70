use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// 健康检查接口，不依赖令牌和 Graph
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
