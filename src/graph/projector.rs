use super::models::{ChatSummary, Member, RawChat};

/// 把 Graph 返回的聊天列表整理成对外格式，并去掉服务账号自己
///
/// 邮箱按原样精确比较，不做大小写处理。聊天和成员的顺序保持不变。
pub fn project(raw_chats: &[RawChat], exclude_email: &str) -> Vec<ChatSummary> {
    raw_chats
        .iter()
        .map(|chat| ChatSummary {
            id: chat.id.clone(),
            topic: chat.topic.clone(),
            members: chat
                .members
                .iter()
                .filter(|member| member.email.as_deref() != Some(exclude_email))
                .map(|member| Member {
                    display_name: member.display_name.clone(),
                    email: member.email.clone(),
                })
                .collect(),
            chat_type: chat.chat_type.clone(),
            web_url: chat.web_url.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMatch {
    pub chat_id: String,
    pub name: Option<String>,
}

/// 按用户邮箱或群组名称查找聊天
///
/// 先找包含该邮箱成员的单聊，找不到再按 topic 匹配。
pub fn find_chat(chats: &[ChatSummary], key: &str) -> Option<ChatMatch> {
    let one_on_one = chats
        .iter()
        .filter(|chat| chat.chat_type.as_deref() == Some("oneOnOne"))
        .find_map(|chat| {
            let member = chat
                .members
                .iter()
                .find(|member| member.email.as_deref() == Some(key))?;
            Some(ChatMatch {
                chat_id: chat.id.clone()?,
                name: member.display_name.clone(),
            })
        });

    one_on_one.or_else(|| {
        chats
            .iter()
            .filter(|chat| chat.topic.as_deref() == Some(key))
            .find_map(|chat| {
                Some(ChatMatch {
                    chat_id: chat.id.clone()?,
                    name: chat.topic.clone(),
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::models::RawMember;
    use pretty_assertions::assert_eq;

    fn member(name: &str, email: &str) -> RawMember {
        RawMember {
            display_name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    fn chat(id: &str, chat_type: &str, topic: Option<&str>, members: Vec<RawMember>) -> RawChat {
        RawChat {
            id: Some(id.to_string()),
            topic: topic.map(str::to_string),
            chat_type: Some(chat_type.to_string()),
            web_url: Some(format!("https://teams.example/{id}")),
            members,
        }
    }

    #[test]
    fn removes_service_account_and_keeps_order() {
        let raw = vec![RawChat {
            id: Some("1".into()),
            members: vec![
                member("Service", "svc@x.com"),
                member("A", "a@x.com"),
                member("B", "b@x.com"),
            ],
            ..Default::default()
        }];

        let chats = project(&raw, "svc@x.com");

        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].id.as_deref(), Some("1"));
        assert_eq!(chats[0].topic, None);
        assert_eq!(chats[0].chat_type, None);
        assert_eq!(
            chats[0].members,
            vec![
                Member {
                    display_name: Some("A".into()),
                    email: Some("a@x.com".into()),
                },
                Member {
                    display_name: Some("B".into()),
                    email: Some("b@x.com".into()),
                },
            ]
        );
    }

    #[test]
    fn exclusion_is_case_sensitive_and_keeps_duplicates() {
        let raw = vec![chat(
            "1",
            "group",
            Some("Ops"),
            vec![
                member("Service", "SVC@x.com"),
                member("A", "a@x.com"),
                member("A", "a@x.com"),
            ],
        )];

        let chats = project(&raw, "svc@x.com");

        assert_eq!(chats[0].members.len(), 3);
        assert_eq!(chats[0].web_url.as_deref(), Some("https://teams.example/1"));
    }

    #[test]
    fn members_without_email_survive() {
        let raw = vec![chat(
            "1",
            "meeting",
            None,
            vec![RawMember {
                display_name: Some("Guest".into()),
                email: None,
            }],
        )];

        let chats = project(&raw, "svc@x.com");
        assert_eq!(chats[0].members[0].email, None);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let chats = project(&[chat("1", "oneOnOne", None, vec![member("A", "a@x.com")])], "");
        let value = serde_json::to_value(&chats[0]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "topic": null,
                "members": [{"display_name": "A", "email": "a@x.com"}],
                "chat_type": "oneOnOne",
                "web_url": "https://teams.example/1"
            })
        );
    }

    #[test]
    fn find_chat_prefers_one_on_one_member() {
        let chats = project(
            &[
                chat("g", "group", Some("a@x.com"), vec![member("A", "a@x.com")]),
                chat("d", "oneOnOne", None, vec![member("A", "a@x.com")]),
            ],
            "svc@x.com",
        );

        assert_eq!(
            find_chat(&chats, "a@x.com"),
            Some(ChatMatch {
                chat_id: "d".into(),
                name: Some("A".into()),
            })
        );
    }

    #[test]
    fn find_chat_falls_back_to_topic() {
        let chats = project(
            &[chat("g", "group", Some("Ops"), vec![member("A", "a@x.com")])],
            "svc@x.com",
        );

        assert_eq!(
            find_chat(&chats, "Ops"),
            Some(ChatMatch {
                chat_id: "g".into(),
                name: Some("Ops".into()),
            })
        );
        assert_eq!(find_chat(&chats, "a@x.com"), None);
    }
}
