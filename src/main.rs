use color_eyre::Result;
use tokio::sync::watch;
use tracing::{error, info};
use web_service::models::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = AppConfig::load()?;

    // ctrl-c 触发优雅关闭
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("❌ 监听 ctrl-c 信号失败: {}", e);
        }
        info!("🛑 收到退出信号，准备关闭服务...");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(config, shutdown_rx).await
}
