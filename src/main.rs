use textile_storefront::infrastructure::{config, Logger};
use textile_storefront::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;

    // guard 必须持有到进程结束
    let _log_guard = Logger::init(&config.logging)?;

    let addr = config.http.socket_addr()?;
    let store_name = config.store.name.clone();
    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 {} 服务运行在 http://{}", store_name, addr);
    info!("📖 API 端点:");
    info!("   GET    /api/products?category=&q=&price=  - 商品列表");
    info!("   GET    /api/products/:id                  - 商品详情");
    info!("   GET    /api/cart                          - 购物车");
    info!("   POST   /api/cart/items                    - 加入购物车");
    info!("   POST   /api/checkout/submit               - 提交订单");
    info!("   GET    /health                            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听退出信号: {}", e);
        return;
    }
    info!("收到退出信号，正在关闭...");
}
