//! Cache Module
//!
//! Provides in-memory caching with per-entry TTL, lazy eviction on read and a
//! periodic background sweep.

mod domains;
mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use domains::{CacheDomain, DomainCaches, DomainStats};
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;
