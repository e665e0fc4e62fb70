use serde::Serialize;

/// 接口统一返回结构
///
/// 成功时 `result` 为 `"success"`，`content` 的字段会平铺到顶层；
/// 失败时 `result` 为 `"error"` 并带上 `error`。
#[derive(Debug, Serialize)]
pub struct ApiResult<T: Serialize> {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            result: "success",
            error: None,
            content: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: "error",
            error: Some(message.into()),
            content: None,
        }
    }
}

impl ApiResult<()> {
    pub fn ok() -> Self {
        Self {
            result: "success",
            error: None,
            content: None,
        }
    }
}
