use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde_json::json;

use super::models::{ChatsResponse, RawChat};
use crate::error::GraphError;

/// Graph API 客户端，不做重试
#[derive(Debug, Clone)]
pub struct GraphChatClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GraphChatClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GraphError> {
        let base_url = base_url.into();
        let base_url = match Url::parse(&base_url) {
            Ok(url) => url,
            Err(_) => return Err(GraphError::InvalidUrl(base_url)),
        };
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// 在 base_url 后追加路径段，每段单独编码，`/`、`?`、`#` 不会改变目标接口
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GraphError> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(GraphError::InvalidUrl(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GraphError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 获取用户的聊天列表（包含成员）
    #[tracing::instrument(skip(self, token))]
    pub async fn list_chats(
        &self,
        user_principal: &str,
        token: &str,
    ) -> Result<Vec<RawChat>, GraphError> {
        let mut url = self.endpoint(&["users", user_principal, "chats"])?;
        url.set_query(Some("$expand=members"));
        tracing::debug!("Graph GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::error!("Graph GET {} failed: {}", url, e))?;

        match response.status() {
            StatusCode::FORBIDDEN => {
                tracing::error!("Access denied. Ensure the service account has logged in.");
                Err(GraphError::AccessDenied)
            }
            StatusCode::OK => {
                let body = response.text().await?;
                let chats: ChatsResponse = serde_json::from_str(&body).map_err(|e| {
                    tracing::error!("Failed to parse chat list response: {}", e);
                    GraphError::RequestFailed {
                        status: StatusCode::OK.as_u16(),
                        body: e.to_string(),
                    }
                })?;
                tracing::info!("Retrieved {} chats", chats.value.len());
                Ok(chats.value)
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::error!("Failed to retrieve user chats ({}): {}", status, body);
                Err(GraphError::RequestFailed {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// 向聊天发送一条消息，Graph 返回 201 视为成功
    #[tracing::instrument(skip(self, token, message))]
    pub async fn send_message(
        &self,
        chat_id: &str,
        token: &str,
        message: &str,
    ) -> Result<(), GraphError> {
        let url = self.endpoint(&["chats", chat_id, "messages"])?;
        let payload = json!({
            "body": {
                "content": message
            }
        });
        tracing::debug!("Graph POST {}", url);

        let response = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Graph POST {} failed: {}", url, e))?;

        let status = response.status();
        if status == StatusCode::CREATED {
            tracing::info!("Message sent successfully");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Failed to send message ({}): {}", status, body);
        Err(GraphError::RequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}
