use axum::Json;
use serde::Serialize;

use crate::result::ApiResult;

pub mod logging;

pub fn success_to_api_response<T: Serialize>(data: T) -> Json<ApiResult<T>> {
    Json(ApiResult::success(data))
}

pub fn ok_to_api_response() -> Json<ApiResult<()>> {
    Json(ApiResult::ok())
}
