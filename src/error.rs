use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::result::ApiResult;

/// 令牌服务相关错误
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token service unreachable: {0}")]
    Unreachable(String),
    #[error("token service returned {status}: {body}")]
    Denied { status: u16, body: String },
    #[error("token service response is malformed")]
    Malformed,
    #[error("token validity {validity} is not after {now}")]
    Expired { validity: i64, now: i64 },
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unreachable(error.to_string())
    }
}

/// Graph API 调用错误
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("access denied, ensure the service account has logged in")]
    AccessDenied,
    #[error("graph request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },
    #[error("graph api unreachable: {0}")]
    Unreachable(String),
    #[error("invalid graph url or path segment: {0:?}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for GraphError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unreachable(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing {0}")]
    MissingField(&'static str),
}

/// 启动配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("config service unreachable: {0}")]
    Unreachable(String),
    #[error("config service returned {0}")]
    Status(u16),
    #[error("global config is missing {0}")]
    Missing(&'static str),
}

impl From<reqwest::Error> for ConfigError {
    fn from(error: reqwest::Error) -> Self {
        Self::Unreachable(error.to_string())
    }
}

/// 对外接口错误，统一返回 400
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No valid Teams token available")]
    TokenUnavailable,
    #[error("Failed to send message")]
    SendFailed(#[source] GraphError),
    #[error("Failed to retrieve chat list")]
    ChatListFailed(#[source] GraphError),
    #[error("No chat found for {0}")]
    ChatNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ApiResult::<()>::error(self.to_string()));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
