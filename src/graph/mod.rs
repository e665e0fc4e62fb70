//! Microsoft Graph 聊天接口
//!
//! 只包含服务需要的两个调用：列出服务账号的聊天，向聊天发送消息。

mod client;
mod models;
pub mod projector;

pub use client::GraphChatClient;
pub use models::{ChatSummary, Member, RawChat, RawMember};
pub use projector::{ChatMatch, find_chat, project};
