use std::sync::Arc;

use cache::TokenCache;
use config::{Config, GlobalConfig};
use graph::GraphChatClient;

pub mod cache;
pub mod config;
pub mod error;
pub mod graph;
pub mod middleware;
pub mod result;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub global: Arc<GlobalConfig>,
    pub tokens: Arc<TokenCache>,
    pub graph: Arc<GraphChatClient>,
}

impl AppState {
    pub fn new(
        config: Config,
        global: GlobalConfig,
        tokens: TokenCache,
        graph: GraphChatClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            global: Arc::new(global),
            tokens: Arc::new(tokens),
            graph: Arc::new(graph),
        }
    }

    /// 服务账号 UPN
    pub fn teams_user(&self) -> &str {
        &self.global.teams_user
    }
}
