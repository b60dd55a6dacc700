//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically cleans up expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between runs.
/// The store lock is held only for the duration of one scan.
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `interval` - Time between cleanup runs
/// * `name` - Cache name used in log lines
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it on shutdown.
///
/// # Panics
/// Panics if called outside a tokio runtime. Use
/// [`ExpiringCache::start_cleanup`](crate::cache::ExpiringCache::start_cleanup)
/// for a checked entry point.
pub fn spawn_cleanup_task<T>(
    store: Arc<Mutex<CacheStore<T>>>,
    interval: Duration,
    name: &'static str,
) -> JoinHandle<()>
where
    T: Clone + Send + 'static,
{
    tokio::spawn(async move {
        info!(
            cache = name,
            "Starting TTL cleanup task with interval of {:?}", interval
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.lock().cleanup_expired();

            if removed > 0 {
                info!(cache = name, "TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!(cache = name, "TTL cleanup: no expired entries found");
            }
        }
    })
}
