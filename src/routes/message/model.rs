use serde_json::Value;

use crate::{error::ValidationError, routes::field_text};

/// `POST /api/message` 请求体，键名为 `chat-id` 和 `message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub message: String,
}

impl SendMessageRequest {
    pub fn from_body(body: Option<&Value>) -> Result<Self, ValidationError> {
        match (field_text(body, "chat-id"), field_text(body, "message")) {
            (Some(chat_id), Some(message)) => Ok(Self { chat_id, message }),
            _ => Err(ValidationError::MissingField("chat-id or message")),
        }
    }
}
