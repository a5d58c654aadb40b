use rescuedogs_mcp_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::SweepCountingCache;

// ============================================================================
// Tests: CacheSweepJob
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_sweep_runs_on_every_interval() {
    // Arrange
    let cache = Arc::new(SweepCountingCache::new(3));
    let token = CancellationToken::new();
    let job = CacheSweepJob::new(cache.clone())
        .with_interval(120)
        .with_cancellation(token.clone());

    // Act - first tick fires immediately
    Arc::new(job).start().await;
    sleep(Duration::from_millis(1)).await;

    // Assert
    assert_eq!(cache.sweeps(), 1);

    sleep(Duration::from_secs(120)).await;
    assert_eq!(cache.sweeps(), 2);

    sleep(Duration::from_secs(240)).await;
    assert_eq!(cache.sweeps(), 4);

    token.cancel();
}

#[tokio::test(start_paused = true)]
async fn test_cancellation_stops_sweeping() {
    // Arrange
    let cache = Arc::new(SweepCountingCache::new(0));
    let token = CancellationToken::new();
    let job = CacheSweepJob::new(cache.clone())
        .with_interval(60)
        .with_cancellation(token.clone());

    Arc::new(job).start().await;
    sleep(Duration::from_millis(1)).await;
    assert_eq!(cache.sweeps(), 1);

    // Act
    token.cancel();
    sleep(Duration::from_secs(600)).await;

    // Assert
    assert_eq!(cache.sweeps(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_runner_starts_registered_sweep() {
    let cache = Arc::new(SweepCountingCache::new(0));
    let token = CancellationToken::new();

    JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(cache.clone())
                .with_interval(30)
                .with_cancellation(token.clone()),
        )
        .start()
        .await;
    sleep(Duration::from_secs(31)).await;

    assert_eq!(cache.sweeps(), 2);
    token.cancel();
}

#[tokio::test]
async fn test_empty_runner_starts_nothing() {
    JobRunner::default().start().await;
}
