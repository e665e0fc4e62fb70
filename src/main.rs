use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;

use teams_relay::{
    AppState,
    cache::TokenCache,
    config::{Config, GlobalConfig},
    graph::GraphChatClient,
    routes,
    utils::logging,
};

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志
    let log_handle = logging::init();

    // 加载配置
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if config.secret_key.is_none() {
        tracing::warn!("API_MASTER_PW is not set");
    }

    // 从配置服务获取全局配置，失败则退出
    let global = match GlobalConfig::fetch(&config.config_url, config.config_timeout()).await {
        Ok(global) => global,
        Err(e) => {
            tracing::error!(
                "Failed to fetch global config from {}: {}",
                config.config_url,
                e
            );
            return ExitCode::FAILURE;
        }
    };
    logging::apply_level(&log_handle, &global.logging_level);

    let tokens = match TokenCache::new(config.token_url.clone(), config.token_timeout()) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::error!("Failed to create token client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let graph = match GraphChatClient::new(config.graph_base_url.clone(), config.graph_timeout()) {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!("Failed to create Graph client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // 启动时先取一次令牌，失败不影响启动
    if let Err(e) = tokens.refresh().await {
        tracing::warn!("Initial Teams token fetch failed: {}", e);
    }

    let state = AppState::new(config, global, tokens, graph);
    let app = routes::router(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
