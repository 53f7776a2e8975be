//! 统一错误处理模块
//!
//! 服务只有启动阶段会失败：配置错误、端口绑定失败、可观测性初始化失败。
//! 这些错误全部是致命的，由二进制入口通过 anyhow 上报并以非零状态退出。

use std::io;

use thiserror::Error;

/// 服务错误类型
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("端口绑定失败: {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("服务器运行失败: {0}")]
    Serve(#[source] io::Error),

    #[error("可观测性初始化失败: {0}")]
    Observability(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Bind { .. } => "BIND_FAILED",
            Self::Serve(_) => "SERVE_FAILED",
            Self::Observability(_) => "OBSERVABILITY_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = ServiceError::Bind {
            addr: "0.0.0.0:80".to_string(),
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert_eq!(err.code(), "BIND_FAILED");
        assert_eq!(
            ServiceError::Observability("x".to_string()).code(),
            "OBSERVABILITY_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::Bind {
            addr: "0.0.0.0:80".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.to_string(), "端口绑定失败: 0.0.0.0:80");

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<io::Error>().is_some());
    }
}
