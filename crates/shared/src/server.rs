//! 服务启动
//!
//! 组装路由与中间件，绑定端口并运行 HTTP 服务直到收到关闭信号。

use std::future::Future;
use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::{Result, ServiceError};
use crate::greeting::{Release, greeting_routes};
use crate::observability::middleware::{http_tracing, request_id};

/// 组装完整的服务路由
///
/// 只注册问候路由，其余路径一律 404。
pub fn build_router(release: Release, config: &AppConfig) -> Router {
    let timeout = Duration::from_secs(config.server.request_timeout_secs);
    apply_middleware(greeting_routes(release), timeout)
}

/// 为路由套上服务中间件，由内到外依次是超时（408）、请求追踪、请求 ID
pub fn apply_middleware(router: Router, timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(middleware::from_fn(http_tracing))
        .layer(middleware::from_fn(request_id))
}

/// 绑定监听地址
///
/// 端口被占用或权限不足时立即失败，不做重试。
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// 在已绑定的监听器上运行服务，`shutdown` 完成后停止接收新连接并等待已有请求处理完毕
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServiceError::Serve)
}

/// 绑定配置中的地址并运行服务，直到收到 SIGTERM 或 Ctrl+C
pub async fn run(release: Release, config: &AppConfig) -> Result<()> {
    let app = build_router(release, config);
    let addr = config.server_addr();

    let listener = bind(&addr).await?;
    info!(
        service = %config.service_name,
        release = %release,
        "Listening on {}",
        addr
    );

    serve(listener, app, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("注册 Ctrl+C 处理器失败: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("注册 SIGTERM 处理器失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
