use serde::{Deserialize, Serialize};

/// Graph `/users/{upn}/chats` 返回的单个聊天
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChat {
    pub id: Option<String>,
    pub topic: Option<String>,
    pub chat_type: Option<String>,
    pub web_url: Option<String>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMember {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatsResponse {
    #[serde(default)]
    pub value: Vec<RawChat>,
}

/// 返回给调用方的聊天信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatSummary {
    pub id: Option<String>,
    pub topic: Option<String>,
    pub members: Vec<Member>,
    pub chat_type: Option<String>,
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub display_name: Option<String>,
    pub email: Option<String>,
}
