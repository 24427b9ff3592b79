use std::sync::Arc;
use std::time::Duration;

use lektury_catalog::ExpiringCache;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// Periodically drop expired entries so idle keys don't linger until their
/// next lookup.
pub fn spawn_cache_sweeper<V>(cache: Arc<ExpiringCache<V>>, period: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let removed = cache.evict_expired();
            if removed > 0 {
                tracing::debug!(removed, remaining = cache.len(), "Swept expired cache entries");
            }
        }
    })
}
