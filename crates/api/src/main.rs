use std::sync::Arc;

use lektury_api::{AppState, Settings, router, spawn_cache_sweeper};
use lektury_catalog::{CatalogClient, ExpiringCache, ReqwestExecutor};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let executor = Arc::new(ReqwestExecutor::new(&settings.upstream.base_url)?);
    let client = Arc::new(CatalogClient::new(executor, Arc::new(ExpiringCache::new())));

    if let Some(period) = settings.cache.sweep_interval() {
        spawn_cache_sweeper(client.cache().clone(), period);
    }

    let app = router(AppState::new(client));
    let listener = TcpListener::bind(&settings.server.bind).await?;
    tracing::info!(
        "Serving catalog from {} on {}",
        settings.upstream.base_url,
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
