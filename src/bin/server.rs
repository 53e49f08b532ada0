use buffett_monitor::{
    cache::FreshnessCache,
    core::config::MonitorConfig,
    edgar::client::EdgarClient,
    server::{app, AppState},
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = MonitorConfig::from_env()?;

    let state = AppState::new(FreshnessCache::new(), Arc::new(EdgarClient::new()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Backend API running on port {}", config.port);

    axum::serve(listener, app(state).into_make_service()).await?;

    Ok(())
}
