use std::time::Duration;

use serde_json::Value;

use crate::error::ConfigError;

/// 从配置服务获取的全局配置，只在启动时读取一次
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    /// 服务账号 UPN，对应 `teams.user`
    pub teams_user: String,
    /// 对应 `web.logging-level`
    pub logging_level: String,
}

impl GlobalConfig {
    pub async fn fetch(url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        Self::from_value(&body)
    }

    /// 解析 `{"config": {...}}` 结构
    pub fn from_value(body: &Value) -> Result<Self, ConfigError> {
        let config = body.get("config").ok_or(ConfigError::Missing("config"))?;

        let teams_user = config
            .pointer("/teams/user")
            .and_then(Value::as_str)
            .filter(|user| !user.is_empty())
            .ok_or(ConfigError::Missing("teams.user"))?
            .to_string();

        let logging_level = config
            .pointer("/web/logging-level")
            .and_then(Value::as_str)
            .unwrap_or("INFO")
            .to_string();

        Ok(Self {
            teams_user,
            logging_level,
        })
    }
}
