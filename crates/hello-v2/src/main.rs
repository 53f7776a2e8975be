//! Mozio 问候服务 v2
//!
//! 启动失败（配置错误、端口被占用或权限不足）时以非零状态退出。

use clap::Parser;
use hello_v2::{RELEASE, SERVICE_NAME};
use mozio_shared::{cli::ServiceArgs, observability, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = ServiceArgs::parse();

    let config = args.load_config(SERVICE_NAME)?;
    let _guard = observability::init(&config, RELEASE).await?;

    info!("Starting {} ({}) on {}", SERVICE_NAME, RELEASE, config.server_addr());

    if let Err(e) = server::run(RELEASE, &config).await {
        error!(code = e.code(), "{}", e);
        return Err(e.into());
    }

    Ok(())
}
