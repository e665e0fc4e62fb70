use serde::Serialize;

use crate::graph::ChatSummary;

#[derive(Debug, Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatSummary>,
}

/// `POST /api/id` 的返回
#[derive(Debug, Serialize)]
pub struct ChatIdResponse {
    #[serde(rename = "chat-id")]
    pub chat_id: String,
    pub name: Option<String>,
}
