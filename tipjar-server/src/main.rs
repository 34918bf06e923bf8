use tipjar_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载环境 (dotenv, 日志)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_level = std::env::var("RUST_LOG").ok();
    init_logger_with_file(log_level.as_deref(), config.log_dir.as_deref());

    tracing::info!("TipJar server starting...");

    // 2. 初始化服务器状态 (存储 + 支付处理器)
    let state = ServerState::initialize(&config)?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    server.run().await
}
