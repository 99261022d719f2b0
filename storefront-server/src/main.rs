use anyhow::Context;
use storefront_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment().context("failed to set up environment")?;

    print_banner();

    tracing::info!(
        timezone = %config.business_timezone,
        snapshot = %config.snapshot_path,
        production = config.is_production(),
        "Storefront server starting..."
    );

    // 2. 初始化服务器状态 (首次加载快照)
    let state = ServerState::initialize(&config).await;

    // 3. 启动 HTTP 服务器 (Server::run 会启动后台任务)
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
