use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::Mutex;

use crate::cache::models::token::{Token, TokenResponse};
use crate::error::AuthError;

/// 当前时间（Unix 秒）
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

fn system_clock() -> Clock {
    Arc::new(|| chrono::Utc::now().timestamp())
}

/// 服务账号令牌缓存
///
/// 令牌由安全服务签发，这里只负责缓存和按需刷新。
/// `validity` 是缓存失效时间，与令牌本身的过期时间无关。
pub struct TokenCache {
    http: reqwest::Client,
    token_url: String,
    clock: Clock,
    cached: Mutex<Option<Token>>,
}

impl TokenCache {
    pub fn new(token_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            token_url: token_url.into(),
            clock: system_clock(),
            cached: Mutex::new(None),
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// 从安全服务重新获取令牌，失败时缓存保持为空
    pub async fn refresh(&self) -> Result<Token, AuthError> {
        let mut cached = self.cached.lock().await;
        self.refresh_locked(&mut cached).await
    }

    /// 返回可用令牌，缓存为空或已过期时先刷新
    pub async fn get_valid_token(&self) -> Option<Token> {
        let mut cached = self.cached.lock().await;
        let now = (self.clock)();

        let needs_refresh = match cached.as_ref() {
            None => {
                tracing::debug!("No cached Teams token available, requesting a new one");
                true
            }
            Some(token) if token.is_expired(now) => {
                tracing::debug!("Cached Teams token has expired, requesting a new one");
                true
            }
            Some(_) => {
                tracing::debug!("Using cached Teams token");
                false
            }
        };

        if needs_refresh {
            self.refresh_or_log(&mut cached).await;
        }

        if cached.is_none() {
            tracing::error!("No valid Teams token available");
        }
        (*cached).clone()
    }

    async fn refresh_or_log(&self, cached: &mut Option<Token>) {
        if let Err(e) = self.refresh_locked(cached).await {
            tracing::error!("Failed to refresh Teams token: {}", e);
        }
    }

    async fn refresh_locked(&self, cached: &mut Option<Token>) -> Result<Token, AuthError> {
        *cached = None;

        let response = self.http.get(&self.token_url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Denied {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|_| AuthError::Malformed)?;
        let token = parsed.into_token((self.clock)())?;

        tracing::debug!("Teams token retrieved, cached until {}", token.expires_at);
        *cached = Some(token.clone());
        Ok(token)
    }
}
