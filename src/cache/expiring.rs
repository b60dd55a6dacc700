//! Shared expiring cache handle
//!
//! Wraps a [`CacheStore`] in `Arc<Mutex<..>>` and owns the optional
//! background sweep task for it.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_cleanup_task;

struct Inner<T> {
    name: &'static str,
    store: Arc<Mutex<CacheStore<T>>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.sweeper.get_mut().take() {
            handle.abort();
        }
    }
}

// == Expiring Cache ==
/// Process-local cache mapping string keys to values of type `T`, where each
/// entry stops being served once its TTL elapses.
///
/// Cloning the handle is cheap and every clone sees the same entries. The
/// sweep task, if started, is aborted when the last clone is dropped.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use health_cache::cache::ExpiringCache;
///
/// let cache = ExpiringCache::new(Duration::from_secs(30 * 60)).unwrap();
/// cache.set("weather_40.7_-74.0", 22);
/// assert_eq!(cache.get("weather_40.7_-74.0"), Some(22));
/// ```
pub struct ExpiringCache<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ExpiringCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for ExpiringCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + 'static> ExpiringCache<T> {
    /// Creates an empty cache with the given default TTL.
    ///
    /// # Errors
    /// `InvalidArgument` if `default_ttl` is zero.
    pub fn new(default_ttl: Duration) -> Result<Self> {
        Self::named("cache", default_ttl)
    }

    /// Like [`new`](Self::new), with a name used in sweep log lines.
    pub fn named(name: &'static str, default_ttl: Duration) -> Result<Self> {
        let store = CacheStore::new(default_ttl)?;

        Ok(Self {
            inner: Arc::new(Inner {
                name,
                store: Arc::new(Mutex::new(store)),
                sweeper: Mutex::new(None),
            }),
        })
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    // == Set ==
    /// Inserts or replaces `key` using the default TTL.
    pub fn set(&self, key: impl Into<String>, value: T) {
        self.inner.store.lock().set(key.into(), value, None);
    }

    /// Inserts or replaces `key` with an explicit TTL.
    ///
    /// A zero `ttl` stores an entry that is already expired: `get` never
    /// returns it and the next read or sweep removes it.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: T, ttl: Duration) {
        self.inner.store.lock().set(key.into(), value, Some(ttl));
    }

    // == Get ==
    /// Returns the live value for `key`, evicting it if it has expired.
    pub fn get(&self, key: &str) -> Option<T> {
        self.inner.store.lock().get(key)
    }

    // == Clear ==
    pub fn clear(&self) {
        self.inner.store.lock().clear();
        debug!(cache = self.name(), "Cache cleared");
    }

    // == Start Cleanup ==
    /// Starts the background sweep, removing expired entries every `interval`.
    ///
    /// Does nothing if a sweep is already running for this cache.
    ///
    /// # Errors
    /// - `InvalidArgument` if `interval` is zero.
    /// - `NoRuntime` if called outside a tokio runtime.
    pub fn start_cleanup(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(CacheError::InvalidArgument(
                "cleanup interval must be greater than zero".to_string(),
            ));
        }
        Handle::try_current().map_err(|e| CacheError::NoRuntime(e.to_string()))?;

        let mut sweeper = self.inner.sweeper.lock();
        if sweeper.as_ref().is_some_and(|handle| !handle.is_finished()) {
            debug!(cache = self.inner.name, "Cleanup task already running");
            return Ok(());
        }

        *sweeper = Some(spawn_cleanup_task(
            Arc::clone(&self.inner.store),
            interval,
            self.inner.name,
        ));
        Ok(())
    }

    // == Stop Cleanup ==
    /// Aborts the background sweep if one is running.
    pub fn stop_cleanup(&self) {
        if let Some(handle) = self.inner.sweeper.lock().take() {
            handle.abort();
            debug!(cache = self.inner.name, "Cleanup task stopped");
        }
    }

    pub fn is_cleanup_running(&self) -> bool {
        self.inner
            .sweeper
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Inspection ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.store.lock().stats()
    }

    pub fn default_ttl(&self) -> Duration {
        self.inner.store.lock().default_ttl()
    }

    /// Number of stored entries, including expired entries not yet evicted.
    pub fn len(&self) -> usize {
        self.inner.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.store.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, sleep};

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_weather_scenario() {
        let cache = ExpiringCache::new(30 * MINUTE).unwrap();

        cache.set("weather_40.7_-74.0", serde_json::json!({ "temp": 22 }));
        assert_eq!(
            cache.get("weather_40.7_-74.0"),
            Some(serde_json::json!({ "temp": 22 }))
        );

        advance(31 * MINUTE).await;

        assert_eq!(cache.get("weather_40.7_-74.0"), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = ExpiringCache::new(MINUTE).unwrap();
        let other = cache.clone();

        cache.set("a", 1);
        assert_eq!(other.get("a"), Some(1));
    }

    #[test]
    fn test_distinct_instances_are_independent() {
        let weather = ExpiringCache::new(MINUTE).unwrap();
        let food = ExpiringCache::new(MINUTE).unwrap();

        weather.set("shared_key", "sunny");
        food.set("shared_key", "apple");

        assert_eq!(weather.get("shared_key"), Some("sunny"));
        assert_eq!(food.get("shared_key"), Some("apple"));

        food.clear();
        assert_eq!(weather.get("shared_key"), Some("sunny"));
    }

    #[test]
    fn test_set_with_zero_ttl_is_absent() {
        let cache = ExpiringCache::new(MINUTE).unwrap();

        cache.set_with_ttl("x", "v", Duration::ZERO);

        assert_eq!(cache.get("x"), None);
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_without_reads() {
        let cache = ExpiringCache::new(MINUTE).unwrap();
        cache.set_with_ttl("short", 1, Duration::from_secs(10));
        cache.set("long", 2);

        cache.start_cleanup(Duration::from_secs(30)).unwrap();

        // Runs past the first sweep at t=30s
        sleep(Duration::from_secs(31)).await;

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().swept, 1);
        assert_eq!(cache.stats().misses, 0);

        cache.stop_cleanup();
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_cleanup_twice_keeps_single_task() {
        let cache: ExpiringCache<u8> = ExpiringCache::new(MINUTE).unwrap();

        cache.start_cleanup(MINUTE).unwrap();
        cache.start_cleanup(MINUTE).unwrap();
        assert!(cache.is_cleanup_running());

        cache.stop_cleanup();
        tokio::task::yield_now().await;
        assert!(!cache.is_cleanup_running());

        // Can be restarted once stopped
        cache.start_cleanup(MINUTE).unwrap();
        assert!(cache.is_cleanup_running());
        cache.stop_cleanup();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_last_handle_aborts_sweep() {
        let cache: ExpiringCache<u8> = ExpiringCache::new(MINUTE).unwrap();
        let store = Arc::clone(&cache.inner.store);
        let other = cache.clone();

        cache.start_cleanup(Duration::from_secs(10)).unwrap();
        assert_eq!(Arc::strong_count(&store), 3);

        // A surviving clone keeps the sweep alive
        drop(cache);
        sleep(Duration::from_secs(11)).await;
        assert!(other.is_cleanup_running());

        drop(other);
        sleep(Duration::from_secs(11)).await;
        assert_eq!(Arc::strong_count(&store), 1);
    }

    #[tokio::test]
    async fn test_start_cleanup_rejects_zero_interval() {
        let cache: ExpiringCache<u8> = ExpiringCache::new(MINUTE).unwrap();

        let result = cache.start_cleanup(Duration::ZERO);
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
        assert!(!cache.is_cleanup_running());
    }

    #[test]
    fn test_start_cleanup_without_runtime() {
        let cache: ExpiringCache<u8> = ExpiringCache::new(MINUTE).unwrap();

        let result = cache.start_cleanup(MINUTE);
        assert!(matches!(result, Err(CacheError::NoRuntime(_))));
    }

    #[test]
    fn test_new_rejects_zero_default_ttl() {
        let result = ExpiringCache::<u8>::new(Duration::ZERO);
        assert!(matches!(result, Err(CacheError::InvalidArgument(_))));
    }

    #[test]
    fn test_stop_cleanup_without_start_is_noop() {
        let cache: ExpiringCache<u8> = ExpiringCache::new(MINUTE).unwrap();
        cache.stop_cleanup();
        assert!(!cache.is_cleanup_running());
    }
}
