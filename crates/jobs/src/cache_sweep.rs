use rescuedogs_mcp_application::ports::CacheStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops expired response cache entries so that keys which are
/// never read again do not accumulate.
pub struct CacheSweepJob {
    cache: Arc<dyn CacheStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self {
            cache,
            interval_secs: 120,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.sweep_expired();
                        let stats = self.cache.stats();
                        if removed > 0 {
                            info!(removed, keys = stats.keys, "Expired cache entries swept");
                        } else {
                            debug!(keys = stats.keys, hits = stats.hits, misses = stats.misses, "Cache sweep found nothing to drop");
                        }
                    }
                }
            }
        });
    }
}
