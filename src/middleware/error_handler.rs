use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

// 只截断日志内容，响应体保持完整
const MAX_LOGGED_CHARS: usize = 2048;

/// 记录所有 4xx/5xx 响应的状态和内容
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read error response body: {}", e);
            parts.headers.remove(axum::http::header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };
    let body_str: String = String::from_utf8_lossy(&bytes)
        .chars()
        .take(MAX_LOGGED_CHARS)
        .collect();

    if status.is_server_error() {
        error!("{} {} failed - Status: {}, Body: {}", method, uri, status, body_str);
    } else {
        warn!("{} {} rejected - Status: {}, Body: {}", method, uri, status, body_str);
    }

    // 重置body以便重新构建响应
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
