use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// 初始化日志，默认 info，设置了 `RUST_LOG` 时以其为准
pub fn init() -> LogHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    handle
}

/// 按全局配置中的 `web.logging-level` 调整日志级别
pub fn apply_level(handle: &LogHandle, level: &str) {
    reload_level(handle, level, std::env::var_os("RUST_LOG").is_some());
}

/// 返回实际生效的级别，`RUST_LOG` 已设置或重载失败时返回 `None`
fn reload_level(handle: &LogHandle, level: &str, rust_log_set: bool) -> Option<&'static str> {
    if rust_log_set {
        tracing::info!("RUST_LOG is set, ignoring configured logging level {}", level);
        return None;
    }

    let directive = level_directive(level);
    if let Err(e) = handle.reload(EnvFilter::new(directive)) {
        tracing::warn!("Failed to apply logging level {}: {}", level, e);
        return None;
    }
    tracing::info!("Logging level set to: {}", directive);
    Some(directive)
}

/// 兼容 WARNING、CRITICAL 等常见级别名称
pub fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        _ => "info",
    }
}
