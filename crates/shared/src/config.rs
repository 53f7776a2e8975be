//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。
//! 所有配置项都有默认值，不提供任何配置时服务监听 `0.0.0.0:80`。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求的最长处理时间，超时返回 408
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 80,
            request_timeout_secs: 30,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    pub json_logs: bool,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_port: 9090,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 配置目录取自 `CONFIG_DIR`，默认为 `config`。
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
        Self::load_from(service_name, Path::new(&config_dir))
    }

    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值（各配置结构的 Default 实现）
    /// 2. {config_dir}/default.toml
    /// 3. {config_dir}/{environment}.toml（MOZIO_ENV，默认 development）
    /// 4. {config_dir}/{service_name}.toml
    /// 5. 环境变量（MOZIO_ 前缀，层级用双下划线，如 MOZIO_SERVER__PORT -> server.port）
    /// 6. 服务特定端口环境变量（如 HELLO_V1_PORT）
    pub fn load_from(service_name: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("MOZIO_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            .add_source(
                Environment::with_prefix("MOZIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        let port_var = std::env::var(Self::service_port_env_var(service_name)).ok();
        config.apply_service_port(port_var.as_deref());

        Ok(config)
    }

    /// 服务特定端口环境变量名
    ///
    /// 将 "hello-v1" 转换为 "HELLO_V1_PORT"
    pub fn service_port_env_var(service_name: &str) -> String {
        format!("{}_PORT", service_name.to_uppercase().replace('-', "_"))
    }

    /// 应用服务特定端口变量的值，无法解析为端口时保持原配置
    fn apply_service_port(&mut self, value: Option<&str>) {
        if let Some(port) = value.and_then(|v| v.trim().parse().ok()) {
            self.server.port = port;
        }
    }

    /// 应用命令行覆盖（优先级最高）
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
