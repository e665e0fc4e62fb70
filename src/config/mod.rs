use std::env;
use std::time::Duration;

use crate::error::ConfigError;

mod global;

pub use global::GlobalConfig;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub config_url: String,
    pub token_url: String,
    pub graph_base_url: String,
    pub token_timeout_secs: u64,
    pub graph_timeout_secs: u64,
    /// 启动时拉取全局配置的超时
    pub config_timeout_secs: u64,
    /// 进程密钥，来自 `API_MASTER_PW`
    pub secret_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5100,
            config_url: "http://core:5100/api/config".to_string(),
            token_url: "http://security:5100/api/token".to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            token_timeout_secs: 3,
            graph_timeout_secs: 10,
            config_timeout_secs: 3,
            secret_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源构建配置，未设置的键使用默认值
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or("SERVER_PORT", lookup("SERVER_PORT"), defaults.server_port)?,
            config_url: lookup("CONFIG_URL").unwrap_or(defaults.config_url),
            token_url: lookup("TOKEN_URL").unwrap_or(defaults.token_url),
            graph_base_url: lookup("GRAPH_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.graph_base_url),
            token_timeout_secs: parse_or(
                "TOKEN_TIMEOUT_SECS",
                lookup("TOKEN_TIMEOUT_SECS"),
                defaults.token_timeout_secs,
            )?,
            graph_timeout_secs: parse_or(
                "GRAPH_TIMEOUT_SECS",
                lookup("GRAPH_TIMEOUT_SECS"),
                defaults.graph_timeout_secs,
            )?,
            config_timeout_secs: parse_or(
                "CONFIG_TIMEOUT_SECS",
                lookup("CONFIG_TIMEOUT_SECS"),
                defaults.config_timeout_secs,
            )?,
            secret_key: lookup("API_MASTER_PW").filter(|value| !value.is_empty()),
        })
    }

    pub fn token_timeout(&self) -> Duration {
        Duration::from_secs(self.token_timeout_secs)
    }

    pub fn graph_timeout(&self) -> Duration {
        Duration::from_secs(self.graph_timeout_secs)
    }

    pub fn config_timeout(&self) -> Duration {
        Duration::from_secs(self.config_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed: Result<T, _> = value.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue { key, value })
        }
    }
}
