use grub_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        "🍽️  GrubDash server starting..."
    );

    // 2. 初始化服务器状态 (载入 fixtures)
    let state = ServerState::initialize(&config)?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
