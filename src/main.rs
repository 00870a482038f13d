mod app;
mod config;
mod db;
mod errors;
mod external;
mod jobs;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::external::price_provider::PriceProvider;
use crate::external::yahoo::YahooProvider;
use crate::services::job_scheduler_service::JobSchedulerService;
use crate::services::score_cache::{PgScoreCache, ScoreCache};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(logging::LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = AppConfig::from_env();
    info!("tracking a universe of {} symbols", config.universe.len());

    let score_cache: Arc<dyn ScoreCache> =
        Arc::new(PgScoreCache::connect(config.database_url.as_deref()).await);
    let price_provider: Arc<dyn PriceProvider> = Arc::new(YahooProvider::new());

    let state = AppState {
        score_cache,
        price_provider,
        universe: Arc::new(config.universe),
        scoring: config.scoring,
        last_refresh: Arc::new(RwLock::new(None)),
    };

    let mut scheduler =
        JobSchedulerService::new(state.job_context(), config.refresh_schedule).await?;
    scheduler.start().await?;

    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 stockval backend running at http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
