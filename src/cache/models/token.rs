use std::fmt;

use serde::Deserialize;

use crate::error::AuthError;

/// 令牌缓存数据模型
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub expires_at: i64, // Unix timestamp
}

impl Token {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// 安全服务 `/api/token` 的返回
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub result: Option<String>,
    pub token: Option<String>,
    pub validity: Option<f64>,
}

impl TokenResponse {
    pub fn into_token(self, now: i64) -> Result<Token, AuthError> {
        let (Some(result), Some(value), Some(validity)) = (self.result, self.token, self.validity)
        else {
            return Err(AuthError::Malformed);
        };

        if result == "error" {
            return Err(AuthError::Malformed);
        }

        if validity <= now as f64 {
            return Err(AuthError::Expired {
                validity: validity.floor() as i64,
                now,
            });
        }

        // 向上取整，保证缓存时 expires_at 仍晚于 now
        let expires_at = validity.ceil() as i64;
        Ok(Token { value, expires_at })
    }
}
