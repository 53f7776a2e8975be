//! 命令行参数
//!
//! 不带任何参数启动时行为完全由配置决定；参数只用于临时覆盖监听地址。

use std::path::Path;

use clap::Parser;
use config::ConfigError;

use crate::config::AppConfig;

/// 问候服务命令行参数
#[derive(Parser, Debug, Default)]
#[command(version, about = "Mozio 问候服务")]
pub struct ServiceArgs {
    /// 监听地址（覆盖配置中的 server.host）
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口（覆盖配置和 *_PORT 环境变量）
    #[arg(short, long)]
    pub port: Option<u16>,

    /// 配置文件目录（默认读取 CONFIG_DIR 或 ./config）
    #[arg(long)]
    pub config_dir: Option<String>,
}

impl ServiceArgs {
    /// 按参数加载配置：指定目录时从该目录读取，最后应用 host/port 覆盖
    pub fn load_config(&self, service_name: &str) -> Result<AppConfig, ConfigError> {
        let config = match &self.config_dir {
            Some(dir) => AppConfig::load_from(service_name, Path::new(dir))?,
            None => AppConfig::load(service_name)?,
        };
        Ok(config.with_overrides(self.host.clone(), self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = ServiceArgs::try_parse_from(["hello-v1"]).unwrap();
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(args.config_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let args =
            ServiceArgs::try_parse_from(["hello-v2", "--host", "127.0.0.1", "-p", "8080"]).unwrap();
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let args = ServiceArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(8088),
            config_dir: Some("/nonexistent/config".to_string()),
        };
        let config = args.load_config("cli-test-service").unwrap();
        assert_eq!(config.service_name, "cli-test-service");
        assert_eq!(config.server_addr(), "127.0.0.1:8088");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(ServiceArgs::try_parse_from(["hello-v1", "--port", "99999"]).is_err());
    }
}
