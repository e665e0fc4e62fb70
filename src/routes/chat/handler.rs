use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use super::model::{ChatIdResponse, ChatListResponse};
use crate::{
    AppState,
    error::{AppError, ValidationError},
    graph::{self, ChatSummary},
    routes::field_text,
    utils::success_to_api_response,
};

/// 取令牌并拉取服务账号可见的聊天
async fn load_chats(state: &AppState) -> Result<Vec<ChatSummary>, AppError> {
    let token = state
        .tokens
        .get_valid_token()
        .await
        .ok_or(AppError::TokenUnavailable)?;

    let raw_chats = state
        .graph
        .list_chats(state.teams_user(), &token.value)
        .await
        .map_err(AppError::ChatListFailed)?;

    Ok(graph::project(&raw_chats, state.teams_user()))
}

#[axum::debug_handler]
pub async fn chat_list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chats = load_chats(&state).await?;
    Ok((
        StatusCode::OK,
        success_to_api_response(ChatListResponse { chats }),
    ))
}

/// 按用户邮箱或群组名称查找 chat-id
#[axum::debug_handler]
pub async fn chat_id(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body.ok().map(|Json(value)| value);
    let Some(user_id) = field_text(body.as_ref(), "user-id") else {
        tracing::error!("Missing user-id in request data");
        return Err(ValidationError::MissingField("user-id").into());
    };

    let chats = load_chats(&state).await?;
    let found = graph::find_chat(&chats, &user_id).ok_or_else(|| {
        tracing::warn!("No chat found for {}", user_id);
        AppError::ChatNotFound(user_id.clone())
    })?;

    Ok((
        StatusCode::OK,
        success_to_api_response(ChatIdResponse {
            chat_id: found.chat_id,
            name: found.name,
        }),
    ))
}
