//! 日志初始化
//!
//! 基于 tracing-subscriber 构建日志输出，支持人类可读与 JSON 两种格式。

use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::ObservabilityConfig;
use crate::error::{Result, ServiceError};

/// 构建环境过滤器
///
/// RUST_LOG 优先，其次是配置中的 log_level，两者都无效时回退到 info。
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化全局日志订阅者
///
/// 同一进程只能初始化一次，重复调用返回错误。
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let fmt_layer = if config.json_logs {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ServiceError::Observability(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_log_level_falls_back() {
        let config = ObservabilityConfig {
            log_level: "not a [valid filter".to_string(),
            ..Default::default()
        };
        // 非法过滤表达式不应 panic
        let _ = env_filter(&config);
    }
}
