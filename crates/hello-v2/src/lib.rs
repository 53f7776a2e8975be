//! Mozio 问候服务 v2
//!
//! 暴露 `/` 与 `/whoareyou` 两个静态文本端点，默认监听 `0.0.0.0:80`。

use axum::Router;
use mozio_shared::{config::AppConfig, greeting::Release, server};

/// 服务名，用于配置文件查找、端口环境变量和日志标识
pub const SERVICE_NAME: &str = "hello-v2";

pub const RELEASE: Release = Release::V2;

/// 创建本服务的完整路由
pub fn app(config: &AppConfig) -> Router {
    server::build_router(RELEASE, config)
}
