use anyhow::Context;
use eshop::infrastructure::{config, logger::Logger};
use eshop::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);
    info!("从{}加载: {:?}", source, config);

    let addr = config.http.socket_addr()?;
    let app = create_router(AppState::default(), config.http.timeout());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 页面:");
    info!("   GET  /                 - 首页");
    info!("   GET  /product/list     - 产品列表");
    info!("   GET  /product/create   - 创建产品");
    info!("   GET  /product/edit?id= - 编辑产品");
    info!("   POST /product/delete   - 删除产品");
    info!("   GET  /health           - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
