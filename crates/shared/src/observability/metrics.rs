//! Prometheus 指标模块
//!
//! 基于 metrics crate 和 metrics-exporter-prometheus 实现指标收集与导出。
//! 指标通过独立的 HTTP 端口暴露，供 Prometheus 抓取，不占用业务端口。

use axum::{Router, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::{Result, ServiceError};
use crate::greeting::Release;
use crate::server;

/// Metrics 资源守卫
///
/// drop 时中止指标服务器任务。
pub struct MetricsHandle {
    server_handle: tokio::task::JoinHandle<()>,
}

impl Drop for MetricsHandle {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// 初始化 Prometheus 指标导出
///
/// 在服务监听的同一 host 上另开端口，暴露 `/metrics` 与 `/health`。
pub async fn init(
    service_name: &str,
    release: Release,
    host: &str,
    port: u16,
) -> Result<MetricsHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Observability(e.to_string()))?;

    register_common_metrics(service_name, release);

    let addr = format!("{}:{}", host, port);
    let listener = server::bind(&addr).await?;
    info!("Metrics server listening on {}", addr);

    let server_handle = start_metrics_server(listener, handle);

    Ok(MetricsHandle { server_handle })
}

/// 注册通用指标描述
fn register_common_metrics(service_name: &str, release: Release) {
    metrics::describe_counter!("http_requests_total", "Total number of HTTP requests");
    metrics::describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    metrics::describe_counter!("service_starts_total", "Total number of service starts");

    metrics::counter!(
        "service_starts_total",
        "service" => service_name.to_string(),
        "release" => release.as_str()
    )
    .increment(1);
}

/// 在已绑定的监听器上启动指标 HTTP 服务器
///
/// `/health` 作为存活探针放在指标端口上，业务端口只保留问候路由。
pub fn start_metrics_server(
    listener: TcpListener,
    handle: PrometheusHandle,
) -> tokio::task::JoinHandle<()> {
    let app = Router::new()
        .route("/metrics", get(move || std::future::ready(handle.render())))
        .route("/health", get(|| async { "OK" }));

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Metrics server error: {}", e);
        }
    })
}

/// 记录 HTTP 请求
///
/// `route` 应为匹配到的路由模板，未匹配的请求统一记为 `unmatched`，避免标签基数失控。
#[inline]
pub fn record_http_request(method: &str, route: &str, status: u16, duration_secs: f64) {
    let status_str = status.to_string();
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status_str.clone()
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status_str
    )
    .record(duration_secs);
}
