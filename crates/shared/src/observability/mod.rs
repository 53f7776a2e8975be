//! 统一可观测性模块
//!
//! 提供日志、指标的统一初始化和管理。
//! 两个服务通过同一入口配置可观测性，确保指标命名和日志格式一致。

pub mod metrics;
pub mod middleware;
pub mod tracing;

use ::tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::greeting::Release;

/// 可观测性资源守卫
///
/// 持有指标导出服务器的生命周期，drop 时停止导出。
pub struct ObservabilityGuard {
    _metrics_handle: Option<metrics::MetricsHandle>,
}

impl ObservabilityGuard {
    /// 创建一个空的 Guard（用于测试或禁用可观测性时）
    pub fn empty() -> Self {
        Self {
            _metrics_handle: None,
        }
    }
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        info!("Shutting down observability...");
    }
}

/// 统一初始化可观测性
///
/// 初始化顺序：
/// 1. Tracing（日志）
/// 2. Metrics（Prometheus 指标，仅在 metrics_enabled 时启动，与服务共用 server.host）
///
/// # Example
///
/// ```ignore
/// use mozio_shared::{config::AppConfig, greeting::Release, observability};
///
/// let config = AppConfig::load("hello-v1")?;
/// let _guard = observability::init(&config, Release::V1).await?;
/// ```
pub async fn init(app_config: &AppConfig, release: Release) -> Result<ObservabilityGuard> {
    let service_name = app_config.service_name.as_str();
    let config = &app_config.observability;

    tracing::init(config)?;

    info!(
        service = %service_name,
        release = %release,
        metrics_enabled = config.metrics_enabled,
        metrics_port = config.metrics_port,
        "Observability initialized"
    );

    let metrics_handle = if config.metrics_enabled {
        Some(
            metrics::init(
                service_name,
                release,
                &app_config.server.host,
                config.metrics_port,
            )
            .await?,
        )
    } else {
        None
    };

    Ok(ObservabilityGuard {
        _metrics_handle: metrics_handle,
    })
}
