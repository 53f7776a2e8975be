//! 共享库
//!
//! 两个问候服务共用的路由、配置、错误处理、可观测性与服务启动代码。
//! v1 与 v2 的差异只体现在传入的 [`greeting::Release`] 上。

pub mod cli;
pub mod config;
pub mod error;
pub mod greeting;
pub mod observability;
pub mod server;
