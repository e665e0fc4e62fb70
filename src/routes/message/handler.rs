use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use super::model::SendMessageRequest;
use crate::{AppState, error::AppError, utils::ok_to_api_response};

/// 供其他服务向 Teams 聊天发送消息
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.ok().map(|Json(value)| value);
    let req = SendMessageRequest::from_body(body.as_ref())
        .inspect_err(|_| tracing::error!("Missing chat-id or message in request data"))?;

    let token = state
        .tokens
        .get_valid_token()
        .await
        .ok_or(AppError::TokenUnavailable)?;

    state
        .graph
        .send_message(&req.chat_id, &token.value, &req.message)
        .await
        .map_err(AppError::SendFailed)?;

    Ok((StatusCode::OK, ok_to_api_response()))
}
